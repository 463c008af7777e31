use anyhow::Result;
use daybook_memory::ProjectMemory;

pub fn handle(memory: &ProjectMemory) -> Result<()> {
    let stats = memory.stats();

    println!("Total projects: {}", stats.total_projects);
    println!("Total sessions: {}", stats.total_sessions);
    match stats.last_updated {
        Some(ts) => println!("Last updated: {}", ts.to_rfc3339()),
        None => println!("Last updated: never"),
    }
    println!("Projects: {}", stats.projects.join(", "));
    Ok(())
}
