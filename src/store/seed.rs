//! Built-in default dataset. Served whenever the backing medium is empty,
//! unreadable or holds an unparseable document.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Category, ContactMessage, Course, CourseModule, Instructor, MessageStatus,
};

pub fn default_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "IT".to_string(),
            created_at: None,
        },
        Category {
            id: 2,
            name: "Media".to_string(),
            created_at: None,
        },
    ]
}

pub fn default_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Digital Marketing & Social Media Specialist".to_string(),
            description: "Master social media strategies and digital marketing tools. Learn to create engaging content, run effective campaigns, and grow online presence for businesses.".to_string(),
            category: "Media".to_string(),
            duration: "3 months".to_string(),
            price: "25,000 PKR".to_string(),
            instructor_id: Some(1),
            image: "/assets/course-digital-marketing.jpg".to_string(),
            pdf_link: "/assets/course-digital-marketing.pdf".to_string(),
            learning_outcomes: outcomes(&[
                "Master social media marketing strategies",
                "Create engaging content for different platforms",
                "Run effective digital marketing campaigns",
                "Analyze campaign performance and metrics",
                "Build and grow online brand presence",
                "Understand SEO and content marketing",
            ]),
            course_structure: vec![
                module("Foundation Skills", "Introduction to digital marketing and social media", "2 weeks"),
                module("Content Creation", "Creating engaging content for various platforms", "4 weeks"),
                module("Campaign Management", "Planning and executing marketing campaigns", "4 weeks"),
                module("Analytics & Optimization", "Measuring success and improving performance", "2 weeks"),
            ],
        },
        Course {
            id: 2,
            title: "Mobile App Development (Beginner Level)".to_string(),
            description: "Build your first mobile apps with hands-on projects. Learn React Native, Flutter, and mobile development fundamentals.".to_string(),
            category: "IT".to_string(),
            duration: "4 months".to_string(),
            price: "30,000 PKR".to_string(),
            instructor_id: Some(2),
            image: "/assets/course-app-development.jpg".to_string(),
            pdf_link: "/assets/course-app-development.pdf".to_string(),
            learning_outcomes: outcomes(&[
                "Master modern programming languages and frameworks",
                "Build real-world mobile applications",
                "Understand software development lifecycle",
                "Learn industry best practices and coding standards",
                "Develop problem-solving and analytical thinking",
                "Create portfolio-worthy projects",
            ]),
            course_structure: vec![
                module("Fundamentals & Setup", "Introduction to development environment and basic concepts", "2 weeks"),
                module("Core Programming", "Learning programming languages and frameworks", "6 weeks"),
                module("Project Development", "Building real applications and solving problems", "4 weeks"),
                module("Testing & Deployment", "Quality assurance and launching applications", "2 weeks"),
            ],
        },
        Course {
            id: 3,
            title: "Video Editing & Post Production".to_string(),
            description: "Learn professional video editing in a real studio setup. Master Adobe Premiere Pro, After Effects, and post-production techniques.".to_string(),
            category: "Media".to_string(),
            duration: "3 months".to_string(),
            price: "28,000 PKR".to_string(),
            instructor_id: Some(3),
            image: "/assets/course-video-editing.jpg".to_string(),
            pdf_link: "/assets/course-video-editing.pdf".to_string(),
            learning_outcomes: outcomes(&[
                "Master professional video editing software",
                "Create engaging social media content",
                "Develop strong communication skills",
                "Learn broadcasting and presentation techniques",
                "Understand digital marketing strategies",
                "Build a professional media portfolio",
            ]),
            course_structure: vec![
                module("Foundation Skills", "Basic concepts and software introduction", "2 weeks"),
                module("Core Techniques", "Advanced editing and production methods", "6 weeks"),
                module("Project Work", "Creating professional content and portfolios", "4 weeks"),
                module("Industry Preparation", "Career guidance and industry insights", "2 weeks"),
            ],
        },
        Course {
            id: 4,
            title: "News Anchoring & Mass Communication Basics".to_string(),
            description: "Gain skills in news presentation and communication. Learn broadcasting techniques, script writing, and on-camera confidence.".to_string(),
            category: "Media".to_string(),
            duration: "2 months".to_string(),
            price: "22,000 PKR".to_string(),
            instructor_id: Some(4),
            image: "/assets/course-news-anchoring.jpg".to_string(),
            pdf_link: "/assets/course-news-anchoring.pdf".to_string(),
            learning_outcomes: outcomes(&[
                "Master news presentation and anchoring skills",
                "Develop strong communication abilities",
                "Learn script writing and broadcasting techniques",
                "Build on-camera confidence and presence",
                "Understand media ethics and journalism principles",
                "Create professional broadcasting portfolio",
            ]),
            course_structure: vec![
                module("Communication Basics", "Fundamental communication and presentation skills", "2 weeks"),
                module("Broadcasting Techniques", "News anchoring and presentation methods", "4 weeks"),
                module("Script Writing", "Writing news scripts and content", "2 weeks"),
                module("Studio Practice", "Real studio experience and portfolio building", "2 weeks"),
            ],
        },
    ]
}

pub fn default_instructors() -> Vec<Instructor> {
    vec![
        Instructor {
            id: 1,
            name: "Ahmed Khan".to_string(),
            biography: "Ahmed is a certified digital marketing specialist with 8+ years of experience in social media marketing and brand development. He has helped over 50 businesses grow their online presence.".to_string(),
            specialization: "Digital Marketing & Social Media".to_string(),
            photo_url: "/assets/instructor-ahmed-khan.jpg".to_string(),
        },
        Instructor {
            id: 2,
            name: "Sara Ahmed".to_string(),
            biography: "Sara is a senior mobile app developer with expertise in React Native and Flutter. She has developed 20+ apps for various industries and loves teaching beginners.".to_string(),
            specialization: "Mobile App Development".to_string(),
            photo_url: "/assets/instructor-sara-ahmed.jpg".to_string(),
        },
        Instructor {
            id: 3,
            name: "Muhammad Ali".to_string(),
            biography: "Muhammad is a professional video editor with 10+ years in the film and media industry. He has worked on documentaries, commercials, and feature films.".to_string(),
            specialization: "Video Editing & Post Production".to_string(),
            photo_url: "/assets/instructor-muhammad-ali.jpg".to_string(),
        },
        Instructor {
            id: 4,
            name: "Fatima Zahra".to_string(),
            biography: "Fatima is a former news anchor with 6 years of broadcasting experience. She specializes in communication skills and media presentation techniques.".to_string(),
            specialization: "News Anchoring & Communication".to_string(),
            photo_url: "/assets/instructor-fatima-zahra.jpg".to_string(),
        },
    ]
}

pub fn default_contact_messages() -> Vec<ContactMessage> {
    vec![
        ContactMessage {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+92 300 1234567".to_string(),
            message: "I'm interested in the Digital Marketing course. Can you provide more details about the schedule?".to_string(),
            status: MessageStatus::Pending,
            created_at: seed_timestamp(2024, 1, 15, 10, 30),
            responded_at: None,
            response: String::new(),
        },
        ContactMessage {
            id: 2,
            name: "Sarah Smith".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "+92 301 9876543".to_string(),
            message: "Great courses! I'd like to enroll in the Mobile App Development program.".to_string(),
            status: MessageStatus::Responded,
            created_at: seed_timestamp(2024, 1, 14, 14, 20),
            responded_at: Some(seed_timestamp(2024, 1, 15, 9, 15)),
            response: "Thank you for your interest! We'll contact you soon with enrollment details.".to_string(),
        },
    ]
}

fn module(title: &str, description: &str, duration: &str) -> CourseModule {
    CourseModule {
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
    }
}

fn outcomes(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn seed_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
