use std::io::{self, BufRead, Write};

use tabled::{
    builder::Builder,
    settings::{object::Rows, Color, Style},
};

use taskdesk_types::Task;

use crate::prompt::Prompt;

pub fn show<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return prompt.warn("No tasks found");
    }
    prompt.say(&render(tasks))
}

pub fn render(tasks: &[Task]) -> String {
    let mut builder = Builder::new();
    builder.push_record(["ID", "Title", "Priority", "Status", "Created"]);

    for task in tasks {
        builder.push_record([
            task.id.map_or_else(|| "-".into(), |id| id.to_string()),
            task.title.to_string(),
            task.priority.to_string(),
            task.status.to_string(),
            task.created_at.format("%d/%m/%Y").to_string(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern_rounded())
        .modify(Rows::first(), Color::FG_WHITE | Color::BOLD);
    table.to_string()
}
