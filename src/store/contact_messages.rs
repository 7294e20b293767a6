use chrono::Utc;

use crate::models::{
    ContactMessage, MessageStats, MessageStatus, NewContactMessageRequest,
    UpdateContactMessageRequest,
};

use super::{DataStore, MESSAGES_KEY, max_id, seed};

impl DataStore {
    /// All messages, most recent first.
    pub async fn list_messages(&self) -> Vec<ContactMessage> {
        let mut messages = self.load_messages().await;
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    pub async fn list_messages_by_status(&self, status: MessageStatus) -> Vec<ContactMessage> {
        self.list_messages()
            .await
            .into_iter()
            .filter(|message| message.status == status)
            .collect()
    }

    pub async fn get_message(&self, id: i64) -> Option<ContactMessage> {
        self.load_messages()
            .await
            .into_iter()
            .find(|message| message.id == id)
    }

    /// Records a public contact submission. Status, timestamps and response
    /// are forced regardless of caller input.
    pub async fn add_message(&self, req: NewContactMessageRequest) -> ContactMessage {
        let mut messages = self.load_messages().await;
        let id = self.next_message_id(max_id(messages.iter().map(|m| m.id)));

        let message = ContactMessage {
            id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
            status: MessageStatus::Pending,
            created_at: Utc::now(),
            responded_at: None,
            response: String::new(),
        };

        messages.push(message.clone());
        self.persist_collection(MESSAGES_KEY, &messages).await;
        message
    }

    pub async fn update_message(
        &self,
        id: i64,
        req: UpdateContactMessageRequest,
    ) -> Option<ContactMessage> {
        let mut messages = self.load_messages().await;
        let message = messages.iter_mut().find(|m| m.id == id)?;

        if let Some(status) = req.status {
            // respondedAt is stamped on the first transition into
            // `responded` and never touched again.
            if status == MessageStatus::Responded && message.responded_at.is_none() {
                message.responded_at = Some(Utc::now());
            }
            message.status = status;
        }
        if let Some(response) = req.response {
            message.response = response;
        }

        let updated = message.clone();
        self.persist_collection(MESSAGES_KEY, &messages).await;
        Some(updated)
    }

    pub async fn delete_message(&self, id: i64) -> bool {
        let mut messages = self.load_messages().await;
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return false;
        }
        self.persist_collection(MESSAGES_KEY, &messages).await;
        true
    }

    pub async fn message_stats(&self) -> MessageStats {
        let messages = self.load_messages().await;
        MessageStats {
            total: messages.len(),
            pending: count_status(&messages, MessageStatus::Pending),
            responded: count_status(&messages, MessageStatus::Responded),
            closed: count_status(&messages, MessageStatus::Closed),
        }
    }

    pub(crate) async fn load_messages(&self) -> Vec<ContactMessage> {
        self.load_collection(MESSAGES_KEY, seed::default_contact_messages)
            .await
    }
}

fn count_status(messages: &[ContactMessage], status: MessageStatus) -> usize {
    messages.iter().filter(|m| m.status == status).count()
}
