//! System prompt construction.
//!
//! Pure functions of (latest user input, stored memories). The session layer
//! rebuilds the system message before every turn so the model always sees
//! the current store.

/// Build the system instruction for one turn.
///
/// States the agent's purpose, instructs it to save memories worth keeping,
/// and embeds the full current store so the model can reference past
/// memories and avoid redundant saves. An empty store renders an explicit
/// "no memories yet" state.
pub fn build_system_prompt(latest_input: &str, memories: &[String]) -> String {
    let mut prompt = String::from(
        "You are Mnemo, a helpful assistant with a long-term memory.\n\n\
         When the user shares information worth remembering for future \
         conversations (preferences, facts about themselves, important \
         context), call the save_memory tool with one short, self-contained \
         sentence per memory. Do not save anything already present in your \
         stored memories. Otherwise, answer normally and use your stored \
         memories as context.\n\n",
    );

    prompt.push_str(&format_memories(memories));

    if !latest_input.trim().is_empty() {
        prompt.push_str("\n\nThe user's latest message is:\n");
        prompt.push_str(latest_input.trim());
    }

    prompt
}

/// Format the stored memories as a prompt section.
fn format_memories(memories: &[String]) -> String {
    if memories.is_empty() {
        return "You have no stored memories yet.".to_string();
    }

    let lines: Vec<String> = memories.iter().map(|m| format!("- {}", m)).collect();
    format!("Your stored memories:\n{}", lines.join("\n"))
}
