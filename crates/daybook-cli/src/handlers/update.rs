use anyhow::Result;
use daybook_index::ClaudeCliSummarizer;
use daybook_memory::ProjectMemory;

pub fn handle(memory: &mut ProjectMemory, no_summaries: bool) -> Result<()> {
    println!("Updating project index...");

    let stats = if no_summaries {
        memory.update(None)?
    } else {
        let summarizer = ClaudeCliSummarizer::default();
        memory.update(Some(&summarizer))?
    };

    println!("Found {} new sessions", stats.new_sessions);
    println!("New projects: {}", stats.new_projects);
    println!("Updated projects: {}", stats.updated_projects);
    Ok(())
}
