use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

use super::templates::{
    COURSE_DURATIONS, COURSE_PROVIDERS, COURSE_TEMPLATES, COURSE_TOPICS, COURSE_VARIATIONS,
    EVENT_LOCATIONS, EVENT_SEEDS, EVENT_TEMPLATES, TARGET_AUDIENCES,
};
use crate::store::Metadata;

/// A generated catalog record before embedding: the vector is attached
/// later, when the bootstrap step runs each `embedding_text` through the
/// embedder.
#[derive(Debug, Clone)]
pub struct CatalogRecord {
    pub id: String,
    pub embedding_text: String,
    pub metadata: Metadata,
}

/// Canonical embedding text for a course; a pure function of the fields.
pub fn course_embedding_text(
    title: &str,
    provider: &str,
    category: &str,
    description: &str,
    riasec: &str,
    ocean: &str,
) -> String {
    format!("{title}. {provider}. {category}. {description} RIASEC: {riasec}. OCEAN Focus: {ocean}.")
}

/// Canonical embedding text for an event; a pure function of the fields.
pub fn event_embedding_text(
    event_name: &str,
    event_type: &str,
    description: &str,
    riasec: &str,
    ocean: &str,
) -> String {
    format!("{event_name}. {event_type}. {description} RIASEC: {riasec}. OCEAN Focus: {ocean}.")
}

/// Seeded synthetic catalog generator. The same seed always produces the
/// same catalogs, so bootstrapped stores are reproducible across runs.
pub struct CatalogGenerator {
    rng: StdRng,
}

impl CatalogGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate_courses(&mut self, n_samples: usize) -> Vec<CatalogRecord> {
        let mut records = Vec::with_capacity(n_samples);
        let mut course_id = 1usize;

        for template in COURSE_TEMPLATES {
            if records.len() >= n_samples {
                break;
            }
            let audience = *TARGET_AUDIENCES.choose(&mut self.rng).unwrap();
            let description = self.course_description(
                template.title,
                template.category,
                template.difficulty,
                template.provider,
            );
            records.push(self.course_record(
                course_id,
                template.title,
                template.provider,
                template.category,
                template.difficulty,
                template.duration,
                audience,
                template.riasec,
                template.ocean,
                &description,
            ));
            course_id += 1;
        }

        while records.len() < n_samples {
            let (topic, category, riasec, ocean) = *COURSE_TOPICS.choose(&mut self.rng).unwrap();
            let variation = COURSE_VARIATIONS.choose(&mut self.rng).unwrap();
            let provider = *COURSE_PROVIDERS.choose(&mut self.rng).unwrap();
            let duration = *COURSE_DURATIONS.choose(&mut self.rng).unwrap();
            let audience = *TARGET_AUDIENCES.choose(&mut self.rng).unwrap();

            let title = format!("{} {} {}", variation.prefix, topic, variation.suffix)
                .trim()
                .to_string();
            let description =
                self.course_description(&title, category, variation.difficulty, provider);

            records.push(self.course_record(
                course_id,
                &title,
                provider,
                category,
                variation.difficulty,
                duration,
                audience,
                riasec,
                ocean,
                &description,
            ));
            course_id += 1;
        }

        records
    }

    pub fn generate_events(&mut self, n_samples: usize) -> Vec<CatalogRecord> {
        let mut records = Vec::with_capacity(n_samples);
        let mut event_id = 1usize;

        for template in EVENT_TEMPLATES {
            if records.len() >= n_samples {
                break;
            }
            let audience = *TARGET_AUDIENCES.choose(&mut self.rng).unwrap();
            let description = self.event_description(
                template.event_name,
                template.event_type,
                template.intensity,
            );
            records.push(self.event_record(
                event_id,
                template.event_name,
                template.event_type,
                template.location_type,
                template.intensity,
                audience,
                template.riasec,
                template.ocean,
                &description,
            ));
            event_id += 1;
        }

        while records.len() < n_samples {
            let (name, event_type, location_type, intensity, riasec, ocean) =
                *EVENT_SEEDS.choose(&mut self.rng).unwrap();

            let full_name = if location_type == "Physical" {
                let location = *EVENT_LOCATIONS.choose(&mut self.rng).unwrap();
                format!("{name} @ {location}")
            } else {
                format!("{name} (Virtual)")
            };

            let audience = *TARGET_AUDIENCES.choose(&mut self.rng).unwrap();
            let description = self.event_description(&full_name, event_type, intensity);

            records.push(self.event_record(
                event_id,
                &full_name,
                event_type,
                location_type,
                intensity,
                audience,
                riasec,
                ocean,
                &description,
            ));
            event_id += 1;
        }

        records
    }

    fn course_description(
        &mut self,
        title: &str,
        category: &str,
        difficulty: &str,
        provider: &str,
    ) -> String {
        let title_lower = title.to_lowercase();
        let difficulty_lower = difficulty.to_lowercase();
        let templates = match category {
            "Business" => vec![
                format!("Develop essential business skills with {title}. This {difficulty_lower} course teaches practical strategies for success in Singapore's competitive business environment."),
                format!("Build your career foundation with {title_lower}. Learn from industry experts and gain actionable skills for the modern workplace."),
            ],
            "Arts" => vec![
                format!("Unleash your creativity with {title}. This {difficulty_lower} course guides you through artistic techniques and creative expression."),
                format!("Express yourself through {title_lower}. This hands-on course from {provider} nurtures creativity and builds practical artistic skills."),
            ],
            "Soft Skills" => vec![
                format!("Enhance your personal and professional development with {title}. Build essential skills for career success and personal growth."),
                format!("Master {title_lower} and boost your confidence in professional settings. Great for building interpersonal skills valued by employers."),
            ],
            _ => vec![
                format!("Master {title_lower} with hands-on projects and real-world applications. This {difficulty_lower} course from {provider} covers essential concepts and practical skills needed in today's tech industry."),
                format!("Learn {title_lower} through interactive exercises and industry-relevant projects. Perfect for students looking to build technical skills for the digital economy."),
            ],
        };
        templates.choose(&mut self.rng).unwrap().clone()
    }

    fn event_description(&mut self, event_name: &str, event_type: &str, intensity: &str) -> String {
        let intensity_lower = intensity.to_lowercase();
        let templates = match event_type {
            "Sports" => vec![
                format!("Join us for {event_name}! A {intensity_lower}-intensity activity perfect for staying active and meeting like-minded fitness enthusiasts in Singapore."),
                format!("Get moving with {event_name}. This {intensity_lower}-intensity session is ideal for students looking to stay fit while having fun."),
            ],
            "Workshop" => vec![
                format!("Learn something new at our {event_name}. Perfect for curious minds looking to explore new hobbies and develop creative skills."),
                format!("Join this engaging {} and walk away with new skills and creations. Suitable for beginners and enthusiasts alike.", event_name.to_lowercase()),
            ],
            "Tech Meetup" => vec![
                format!("Connect with Singapore's tech community at {event_name}. Network with innovators, share ideas, and stay updated on the latest trends."),
                format!("Be part of {event_name} and engage with industry professionals. Perfect for students interested in technology and innovation."),
            ],
            _ => vec![
                format!("Expand your social circle at {event_name}. Meet people with shared interests in a friendly, welcoming atmosphere."),
                format!("Experience {event_name} and build lasting friendships. A great way to unwind, learn, and connect with your community."),
            ],
        };
        templates.choose(&mut self.rng).unwrap().clone()
    }

    #[allow(clippy::too_many_arguments)]
    fn course_record(
        &mut self,
        id: usize,
        title: &str,
        provider: &str,
        category: &str,
        difficulty: &str,
        duration: &str,
        audience: &str,
        riasec: &str,
        ocean: &str,
        description: &str,
    ) -> CatalogRecord {
        let mut metadata = Metadata::new();
        metadata.insert("title".to_string(), json!(title));
        metadata.insert("provider".to_string(), json!(provider));
        metadata.insert("category".to_string(), json!(category));
        metadata.insert("difficulty".to_string(), json!(difficulty));
        metadata.insert("duration".to_string(), json!(duration));
        metadata.insert("target_audience".to_string(), json!(audience));
        metadata.insert("primary_riasec".to_string(), json!(riasec));
        metadata.insert("ocean_trait_focus".to_string(), json!(ocean));
        metadata.insert("description".to_string(), json!(description));

        CatalogRecord {
            id: format!("COURSE_{id:04}"),
            embedding_text: course_embedding_text(
                title,
                provider,
                category,
                description,
                riasec,
                ocean,
            ),
            metadata,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn event_record(
        &mut self,
        id: usize,
        event_name: &str,
        event_type: &str,
        location_type: &str,
        intensity: &str,
        audience: &str,
        riasec: &str,
        ocean: &str,
        description: &str,
    ) -> CatalogRecord {
        let mut metadata = Metadata::new();
        metadata.insert("event_name".to_string(), json!(event_name));
        metadata.insert("type".to_string(), json!(event_type));
        metadata.insert("location_type".to_string(), json!(location_type));
        metadata.insert("intensity".to_string(), json!(intensity));
        metadata.insert("target_audience".to_string(), json!(audience));
        metadata.insert("primary_riasec".to_string(), json!(riasec));
        metadata.insert("ocean_trait_focus".to_string(), json!(ocean));
        metadata.insert("description".to_string(), json!(description));

        CatalogRecord {
            id: format!("EVENT_{id:04}"),
            embedding_text: event_embedding_text(
                event_name,
                event_type,
                description,
                riasec,
                ocean,
            ),
            metadata,
        }
    }
}
