//! Wire shapes for `models/{model}:generateContent`

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequest<'a> {
    pub contents: Vec<ContentDto<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfigDto>,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn text(prompt: &'a str) -> Self {
        Self {
            contents: vec![ContentDto {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: None,
        }
    }

    pub fn image(prompt: &'a str, aspect_ratio: &'static str) -> Self {
        Self {
            generation_config: Some(GenerationConfigDto {
                image_config: ImageConfigDto { aspect_ratio },
            }),
            ..Self::text(prompt)
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ContentDto<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct RequestPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfigDto {
    pub image_config: ImageConfigDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ImageConfigDto {
    pub aspect_ratio: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<CandidateDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateDto {
    #[serde(default)]
    pub content: Option<CandidateContentDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContentDto {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineDataDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct InlineDataDto {
    pub mime_type: String,
    /// Base64
    pub data: String,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &ResponsePart> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|c| c.parts.iter())
    }

    /// Concatenated text of the first candidate
    pub fn text(&self) -> String {
        self.parts()
            .filter_map(|p| p.text.as_deref())
            .collect::<String>()
    }

    /// First inline payload of the first candidate
    pub fn inline_data(&self) -> Option<&InlineDataDto> {
        self.parts().find_map(|p| p.inline_data.as_ref())
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorEnvelope {
    pub error: ApiErrorDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorDto {
    #[serde(default)]
    pub message: String,
}
