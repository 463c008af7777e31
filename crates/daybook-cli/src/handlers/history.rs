use anyhow::Result;
use daybook_memory::ProjectMemory;

pub fn handle(memory: &ProjectMemory, project: &str) -> Result<()> {
    match memory.project_history(project) {
        Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
        None => println!("No history found for project: {}", project),
    }
    Ok(())
}
