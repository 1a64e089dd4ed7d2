// src/services/provider.rs

/// Maps a user message to a reply. The call is synchronous and may be slow;
/// handlers run it on the blocking pool. Implementations must tolerate
/// concurrent calls and an empty message.
pub trait ResponseProvider: Send + Sync {
    fn get_response(&self, message: &str) -> anyhow::Result<String>;
}
