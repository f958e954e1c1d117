use uttoron::catalog::{Catalog, CatalogFeed};
use uttoron::config::SiteConfig;
use uttoron::models::StatTargets;
use uttoron::services::{GatewayConfig, IdentityConfig};
use uttoron::web::AppState;

/// Feed fixture in the wrapped `data` shape the exporter currently ships.
/// Six courses so the popular strip has something to truncate.
pub const SEED_FEED: &str = r#"{
    "courses": {
        "data": [
            {
                "id": "bcs-preliminary",
                "title": "BCS Preliminary Complete Course",
                "summary": "Full syllabus coverage with weekly model tests.",
                "price": 3500,
                "image": "covers/bcs-preliminary.jpg"
            },
            {
                "id": "admission-science",
                "title": "University Admission (Science)",
                "summary": "Physics, Chemistry and Higher Math preparation.",
                "price": 4500,
                "image": "covers/admission-science.jpg"
            },
            {
                "id": "bank-job",
                "title": "Bank Job Preparation",
                "summary": "Math shortcuts, English and general knowledge.",
                "price": 2800
            },
            {
                "id": "hsc-physics",
                "title": "HSC Physics Crash Course",
                "summary": "Board-style question practice on every chapter.",
                "price": 1500
            },
            {
                "id": "spoken-english",
                "title": "Spoken English Basics",
                "summary": "Everyday conversation practice in small groups.",
                "price": 1200
            },
            {
                "id": "freelancing-basics",
                "title": "Freelancing Fundamentals",
                "summary": "A free starter course on finding your first clients."
            }
        ]
    },
    "faculty": [
        { "name": "Mahmudul Hasan", "photo": "faculty/mahmudul-hasan.jpg" },
        { "name": "Sharmin Akter" }
    ],
    "videos": [
        {
            "title": "How we run a live model test",
            "url": "https://www.facebook.com/uttoron.academy/videos/10001"
        }
    ],
    "stats": { "students": 25000, "courses": 32, "exams": 120000 }
}"#;

pub fn parse_feed(json: &str) -> CatalogFeed {
    serde_json::from_str(json).expect("Invalid feed JSON in test helper")
}

pub fn get_seed_catalog() -> Catalog {
    Catalog::from_feed(parse_feed(SEED_FEED))
}

pub fn get_seed_targets() -> StatTargets {
    StatTargets {
        students: 25000,
        courses: 32,
        exams: 120000,
    }
}

pub fn get_seed_config() -> SiteConfig {
    SiteConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        public_base_url: "https://uttoron.test".to_string(),
        catalog_path: "data/catalog.json".to_string(),
        media_base_url: "https://cdn.uttoron.test".to_string(),
        identity: IdentityConfig {
            api_key: String::new(),
            project_id: String::new(),
            sender_id: String::new(),
            app_id: String::new(),
        },
        gateway: GatewayConfig {
            checkout_url: "https://sandbox.pay.example/checkout".to_string(),
            store_id: "uttoron-test".to_string(),
        },
    }
}

pub fn get_seed_config_with_identity() -> SiteConfig {
    let mut config = get_seed_config();
    config.identity = IdentityConfig {
        api_key: "test-api-key".to_string(),
        project_id: "uttoron-test-project".to_string(),
        sender_id: "424242".to_string(),
        app_id: "1:424242:web:abcdef".to_string(),
    };
    config
}

pub fn get_seed_state() -> AppState {
    AppState::build(get_seed_config(), get_seed_catalog())
}

pub fn get_seed_state_empty() -> AppState {
    AppState::build(get_seed_config(), Catalog::empty())
}

pub fn get_seed_state_with_identity() -> AppState {
    AppState::build(get_seed_config_with_identity(), get_seed_catalog())
}
