use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ImageEditResponse {
    pub created: Option<i64>,
    #[serde(default)]
    pub data: Vec<ImageEditData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageEditData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    pub revised_prompt: Option<String>,
}
