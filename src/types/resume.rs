// src/types/resume.rs
//! Resume upload / AI-analysis payloads. These share the auth envelope.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub summary: String,
    #[serde(rename = "jobKeywords", default)]
    pub job_keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "resumeId")]
    pub resume_id: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "uploadDate", default)]
    pub upload_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeMetadata {
    #[serde(rename = "resumeId")]
    pub resume_id: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "uploadDate", default)]
    pub upload_date: String,
    #[serde(rename = "hasAnalysis", default)]
    pub has_analysis: bool,
    #[serde(default)]
    pub analysis: Option<AnalysisResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_without_analysis() {
        let raw = serde_json::json!({
            "resumeId": "r1",
            "fileName": "cv.pdf",
            "uploadDate": "2026-08-10T00:00:00Z",
            "hasAnalysis": false
        });
        let meta: ResumeMetadata = serde_json::from_value(raw).unwrap();
        assert!(!meta.has_analysis);
        assert!(meta.analysis.is_none());
    }

    #[test]
    fn test_analysis_parses() {
        let raw = serde_json::json!({
            "skills": [{"category": "Languages", "items": ["Rust", "SQL"]}],
            "summary": "Systems engineer.",
            "jobKeywords": ["backend", "rust"]
        });
        let analysis: AnalysisResult = serde_json::from_value(raw).unwrap();
        assert_eq!(analysis.skills[0].items.len(), 2);
        assert_eq!(analysis.job_keywords, vec!["backend", "rust"]);
    }
}
