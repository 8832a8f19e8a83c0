use database::entities::{section, video};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub media_path: String,
}

impl From<video::Model> for VideoResponse {
    fn from(video: video::Model) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title,
            media_path: video.media_path,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub id: String,
    pub title: String,
    pub videos: Vec<VideoResponse>,
}

impl SectionResponse {
    pub fn new(section: section::Model, videos: Vec<video::Model>) -> Self {
        Self {
            id: section.id.to_string(),
            title: section.title,
            videos: videos.into_iter().map(VideoResponse::from).collect(),
        }
    }
}

/// Body of a gated content read. Both arms are sent with a 200 status:
/// `Pending` is a call-to-action for the frontend, not an error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Gated<T> {
    Content(T),
    Pending { message: String },
}

#[cfg(test)]
mod test {
    use super::{Gated, SectionResponse, VideoResponse};
    use serde_json::json;

    #[test]
    fn test_gated_serializes_flat() {
        let granted = Gated::Content(vec![VideoResponse {
            id: "v1".to_string(),
            title: "Intro".to_string(),
            media_path: "videos/intro.mp4".to_string(),
        }]);
        assert_eq!(
            serde_json::to_value(&granted).unwrap(),
            json!([{"id": "v1", "title": "Intro", "media_path": "videos/intro.mp4"}])
        );

        let pending: Gated<Vec<SectionResponse>> = Gated::Pending {
            message: "order the course first".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&pending).unwrap(),
            json!({"message": "order the course first"})
        );
    }
}
