//! Template tables for the synthetic catalogs. Courses cover the four
//! upskilling categories; events cover the four holistic activity types.
//! RIASEC letters and OCEAN traits are attached as matching signals.

pub struct CourseTemplate {
    pub title: &'static str,
    pub provider: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub duration: &'static str,
    pub riasec: &'static str,
    pub ocean: &'static str,
}

pub struct EventTemplate {
    pub event_name: &'static str,
    pub event_type: &'static str,
    pub location_type: &'static str,
    pub intensity: &'static str,
    pub riasec: &'static str,
    pub ocean: &'static str,
}

macro_rules! course {
    ($title:literal, $provider:literal, $category:literal, $difficulty:literal, $duration:literal, $riasec:literal, $ocean:literal) => {
        CourseTemplate {
            title: $title,
            provider: $provider,
            category: $category,
            difficulty: $difficulty,
            duration: $duration,
            riasec: $riasec,
            ocean: $ocean,
        }
    };
}

macro_rules! event {
    ($name:literal, $type:literal, $location:literal, $intensity:literal, $riasec:literal, $ocean:literal) => {
        EventTemplate {
            event_name: $name,
            event_type: $type,
            location_type: $location,
            intensity: $intensity,
            riasec: $riasec,
            ocean: $ocean,
        }
    };
}

pub const COURSE_TEMPLATES: &[CourseTemplate] = &[
    // Tech
    course!("Python for Beginners", "Coursera", "Tech", "Beginner", "4 weeks", "I", "Openness"),
    course!("Advanced Python Programming", "SkillsFuture", "Tech", "Advanced", "8 weeks", "I", "Openness"),
    course!("Introduction to Web Development", "Coursera", "Tech", "Beginner", "5 weeks", "I", "Openness"),
    course!("Full Stack Web Development Bootcamp", "Udemy", "Tech", "Advanced", "12 weeks", "I", "Conscientiousness"),
    course!("Machine Learning Foundations", "Coursera", "Tech", "Intermediate", "8 weeks", "I", "Openness"),
    course!("Cloud Computing with AWS", "Coursera", "Tech", "Intermediate", "8 weeks", "I", "Conscientiousness"),
    course!("Cybersecurity Fundamentals", "Coursera", "Tech", "Beginner", "5 weeks", "C", "Conscientiousness"),
    course!("SQL for Data Analysis", "Udemy", "Tech", "Beginner", "4 weeks", "I", "Conscientiousness"),
    course!("Docker and Kubernetes Mastery", "Udemy", "Tech", "Intermediate", "6 weeks", "I", "Conscientiousness"),
    course!("Game Development with Unity", "Udemy", "Tech", "Intermediate", "8 weeks", "A", "Openness"),
    // Business
    course!("Digital Marketing 101", "Coursera", "Business", "Beginner", "4 weeks", "E", "Extraversion"),
    course!("Social Media Marketing Strategy", "Udemy", "Business", "Intermediate", "5 weeks", "E", "Extraversion"),
    course!("Financial Modeling with Excel", "Udemy", "Business", "Intermediate", "5 weeks", "C", "Conscientiousness"),
    course!("Entrepreneurship 101", "SkillsFuture", "Business", "Beginner", "6 weeks", "E", "Openness"),
    course!("Project Management Professional", "SkillsFuture", "Business", "Intermediate", "8 weeks", "C", "Conscientiousness"),
    course!("Product Management Essentials", "Coursera", "Business", "Intermediate", "6 weeks", "E", "Conscientiousness"),
    course!("E-commerce Business Basics", "Udemy", "Business", "Beginner", "4 weeks", "E", "Openness"),
    // Arts
    course!("Graphic Design Fundamentals", "Coursera", "Arts", "Beginner", "5 weeks", "A", "Openness"),
    course!("Adobe Photoshop Masterclass", "Udemy", "Arts", "Intermediate", "6 weeks", "A", "Openness"),
    course!("UI/UX Design Principles", "Coursera", "Arts", "Intermediate", "6 weeks", "A", "Openness"),
    course!("Digital Photography Basics", "SkillsFuture", "Arts", "Beginner", "3 weeks", "A", "Openness"),
    course!("Music Production with Ableton", "Coursera", "Arts", "Intermediate", "8 weeks", "A", "Openness"),
    course!("Creative Writing Workshop", "SkillsFuture", "Arts", "Beginner", "6 weeks", "A", "Openness"),
    course!("Sketching and Drawing Fundamentals", "Udemy", "Arts", "Beginner", "4 weeks", "A", "Openness"),
    course!("Digital Illustration Mastery", "Coursera", "Arts", "Intermediate", "6 weeks", "A", "Openness"),
    // Soft Skills
    course!("Public Speaking Masterclass", "Coursera", "Soft Skills", "Beginner", "4 weeks", "S", "Extraversion"),
    course!("Effective Communication Skills", "SkillsFuture", "Soft Skills", "Beginner", "4 weeks", "S", "Extraversion"),
    course!("Leadership Development Program", "Coursera", "Soft Skills", "Intermediate", "8 weeks", "E", "Extraversion"),
    course!("Emotional Intelligence at Work", "Udemy", "Soft Skills", "Beginner", "3 weeks", "S", "Agreeableness"),
    course!("Critical Thinking and Problem Solving", "Coursera", "Soft Skills", "Intermediate", "5 weeks", "I", "Openness"),
    course!("Time Management Mastery", "Udemy", "Soft Skills", "Beginner", "2 weeks", "C", "Conscientiousness"),
    course!("Networking for Career Success", "SkillsFuture", "Soft Skills", "Beginner", "2 weeks", "E", "Extraversion"),
    course!("Interview Skills Workshop", "Coursera", "Soft Skills", "Beginner", "2 weeks", "S", "Extraversion"),
];

pub const EVENT_TEMPLATES: &[EventTemplate] = &[
    // Sports
    event!("Weekend Cycling at East Coast", "Sports", "Physical", "Medium", "R", "Extraversion"),
    event!("Morning Yoga in the Park", "Sports", "Physical", "Low", "S", "Openness"),
    event!("5K Fun Run for Charity", "Sports", "Physical", "Medium", "S", "Agreeableness"),
    event!("Rock Climbing Indoor Session", "Sports", "Physical", "Medium", "R", "Openness"),
    event!("Beach Volleyball Tournament", "Sports", "Physical", "Medium", "S", "Extraversion"),
    event!("Basketball 3v3 Tournament", "Sports", "Physical", "High", "S", "Extraversion"),
    event!("Dance Fitness Workshop", "Sports", "Physical", "Medium", "A", "Extraversion"),
    event!("HIIT Bootcamp", "Sports", "Physical", "High", "R", "Conscientiousness"),
    event!("Hiking at MacRitchie Reservoir", "Sports", "Physical", "Medium", "R", "Openness"),
    // Workshops
    event!("Pottery Workshop", "Workshop", "Physical", "Low", "A", "Openness"),
    event!("Art Jamming Session", "Workshop", "Physical", "Low", "A", "Openness"),
    event!("Watercolor Painting Class", "Workshop", "Physical", "Low", "A", "Openness"),
    event!("Cooking Class: Local Cuisine", "Workshop", "Physical", "Low", "A", "Openness"),
    event!("Intro to 3D Printing", "Workshop", "Physical", "Low", "I", "Openness"),
    event!("Arduino Hardware Hacking", "Workshop", "Physical", "Medium", "I", "Openness"),
    event!("Photography Walk", "Workshop", "Physical", "Low", "A", "Openness"),
    event!("Woodworking Basics", "Workshop", "Physical", "Medium", "R", "Openness"),
    // Tech meetups
    event!("AI/ML Singapore Meetup", "Tech Meetup", "Physical", "Low", "I", "Openness"),
    event!("Startup Pitch Night", "Tech Meetup", "Physical", "Medium", "E", "Extraversion"),
    event!("Hackathon Weekend", "Tech Meetup", "Physical", "High", "I", "Openness"),
    event!("Data Science Community Meetup", "Tech Meetup", "Physical", "Low", "I", "Openness"),
    event!("UX Design Critique Session", "Tech Meetup", "Physical", "Low", "A", "Openness"),
    event!("Women in Tech Networking", "Tech Meetup", "Physical", "Low", "S", "Extraversion"),
    // Social
    event!("Book Club Meetup", "Social", "Physical", "Low", "A", "Openness"),
    event!("Board Game Night", "Social", "Physical", "Low", "S", "Extraversion"),
    event!("Volunteer Beach Cleanup", "Social", "Physical", "Medium", "S", "Agreeableness"),
    event!("Toastmasters Meeting", "Social", "Physical", "Low", "E", "Extraversion"),
    event!("Poetry Open Mic Night", "Social", "Physical", "Low", "A", "Openness"),
    event!("Language Exchange Cafe", "Social", "Physical", "Low", "S", "Openness"),
    event!("Meditation Circle", "Social", "Physical", "Low", "S", "Openness"),
];

/// Variation axes used to pad the catalogs past the base templates.
pub struct CourseVariation {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub difficulty: &'static str,
}

pub const COURSE_VARIATIONS: &[CourseVariation] = &[
    CourseVariation { prefix: "Introduction to", suffix: "", difficulty: "Beginner" },
    CourseVariation { prefix: "Advanced", suffix: "Techniques", difficulty: "Advanced" },
    CourseVariation { prefix: "Practical", suffix: "Workshop", difficulty: "Intermediate" },
    CourseVariation { prefix: "Complete", suffix: "Bootcamp", difficulty: "Intermediate" },
    CourseVariation { prefix: "Professional", suffix: "Certification", difficulty: "Advanced" },
];

/// (topic, category, riasec, ocean) seeds for variation courses.
pub const COURSE_TOPICS: &[(&str, &str, &str, &str)] = &[
    ("Data Visualization", "Tech", "I", "Openness"),
    ("Excel for Business", "Business", "C", "Conscientiousness"),
    ("Presentation Design", "Arts", "A", "Openness"),
    ("Networking Skills", "Soft Skills", "E", "Extraversion"),
    ("API Development", "Tech", "I", "Conscientiousness"),
    ("Brand Strategy", "Business", "E", "Openness"),
    ("Video Production", "Arts", "A", "Openness"),
    ("Active Listening", "Soft Skills", "S", "Agreeableness"),
    ("Testing and QA", "Tech", "C", "Conscientiousness"),
    ("Sales Fundamentals", "Business", "E", "Extraversion"),
];

pub const COURSE_PROVIDERS: &[&str] = &[
    "Coursera",
    "Udemy",
    "SkillsFuture",
    "Local Poly",
    "NUS Extension",
    "SMU Academy",
];

pub const COURSE_DURATIONS: &[&str] = &[
    "2 weeks", "3 weeks", "4 weeks", "5 weeks", "6 weeks", "8 weeks", "10 weeks", "12 weeks",
];

/// (name, type, location_type, intensity, riasec, ocean) seeds for
/// variation events.
pub const EVENT_SEEDS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("Sunrise Cycling", "Sports", "Physical", "Medium", "R", "Conscientiousness"),
    ("Sunset Yoga", "Sports", "Physical", "Low", "S", "Openness"),
    ("Indoor Bouldering", "Sports", "Physical", "Medium", "R", "Openness"),
    ("Pottery Basics", "Workshop", "Physical", "Low", "A", "Openness"),
    ("Digital Art Session", "Workshop", "Online", "Low", "A", "Openness"),
    ("Startup Coffee Chat", "Tech Meetup", "Physical", "Low", "E", "Extraversion"),
    ("Coding Dojo", "Tech Meetup", "Physical", "Medium", "I", "Openness"),
    ("Philosophy Discussion", "Social", "Physical", "Low", "I", "Openness"),
    ("Photography Walkabout", "Workshop", "Physical", "Low", "A", "Openness"),
    ("Improv Comedy", "Social", "Physical", "Medium", "A", "Extraversion"),
];

pub const EVENT_LOCATIONS: &[&str] = &[
    "Marina Bay", "Orchard", "Jurong", "Tampines", "Woodlands", "Sentosa",
];

pub const TARGET_AUDIENCES: &[&str] = &["Secondary", "Post-Secondary", "Both"];
