use anyhow::Result;
use daybook_memory::ProjectMemory;

pub fn handle(memory: &ProjectMemory, date: Option<&str>, json: bool) -> Result<()> {
    let context = memory.context_for(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&context)?);
        return Ok(());
    }

    println!("Date: {}", context.date);
    println!(
        "Projects worked on: {}",
        context.projects_worked_on.join(", ")
    );
    println!("Today's sessions: {}", context.today.len());
    println!("Historical context for {} projects", context.history.len());
    Ok(())
}
