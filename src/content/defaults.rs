//! Embedded default content
//!
//! Compile-time collections used by the standalone (no backend) variant.

use super::collections::Collections;
use super::types::{BlogPost, Certification, WorkItem};

/// Default works, certifications and blog posts
pub fn default_collections() -> Collections {
    Collections {
        works: vec![
            WorkItem {
                id: "1".to_string(),
                title: "Secure File Vault".to_string(),
                category: "Web App".to_string(),
                image_url: "https://placehold.co/600x400?text=Vault".to_string(),
                description: "End-to-end encrypted file sharing with expiring links.".to_string(),
            },
            WorkItem {
                id: "2".to_string(),
                title: "IoT Greenhouse Monitor".to_string(),
                category: "IoT".to_string(),
                image_url: "https://placehold.co/600x400?text=Greenhouse".to_string(),
                description: "Sensor dashboard with alerting for soil moisture and temperature."
                    .to_string(),
            },
        ],
        certifications: vec![Certification {
            id: "1".to_string(),
            name: "Certified Ethical Hacker".to_string(),
            issuer: "EC-Council".to_string(),
            date: "2024".to_string(),
            image_url: "https://placehold.co/600x400?text=CEH".to_string(),
        }],
        blog: vec![BlogPost {
            id: "1".to_string(),
            title: "Hardening a Node.js API".to_string(),
            date: "2025-01-15".to_string(),
            slug: "hardening-a-nodejs-api".to_string(),
            excerpt: "Rate limiting, input validation and secrets handling in practice.".to_string(),
        }],
    }
}
