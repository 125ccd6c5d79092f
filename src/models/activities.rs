use serde::Serialize;

// A named extracurricular offering. The activity's display name is the map
// key in the directory, not a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Some activities (Programming Class, Gym Class) have no instructor on
    // record; the key is omitted from the JSON entirely in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    // Advisory capacity. Stored and reported, never enforced on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}
