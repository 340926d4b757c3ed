use std::io::{self, BufRead, Write};

use taskdesk_store::TaskRepo;
use taskdesk_types::{Task, TaskPriority, TaskTitle};

use crate::prompt::Prompt;
use crate::table;

pub fn add<R: BufRead, W: Write>(repo: &TaskRepo, prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let title = loop {
        match prompt.line("Title: ")? {
            None => return Ok(()),
            Some(raw) => match raw.parse::<TaskTitle>() {
                Ok(title) => break title,
                Err(error) => prompt.warn(&error.to_string())?,
            },
        }
    };
    let description = prompt.line("Description: ")?.unwrap_or_default();
    let priority = prompt.read_priority(TaskPriority::default())?;

    let task = Task::new(title, description, priority);
    match repo.insert(&task) {
        Some(id) => prompt.success(&format!("Task created with id {id}")),
        None => prompt.error("Could not save the task, check the data and try again"),
    }
}

pub fn list<R: BufRead, W: Write>(repo: &TaskRepo, prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let order = if prompt.confirm("Order the results? (y/n): ")? {
        prompt.read_order()?
    } else {
        None
    };

    table::show(prompt, &repo.list(order))
}

pub fn update<R: BufRead, W: Write>(repo: &TaskRepo, prompt: &mut Prompt<R, W>) -> io::Result<()> {
    loop {
        let Some(id) = prompt.read_number::<i64>("Id of the task to update (0=Cancel): ")? else {
            return Ok(());
        };
        if id == 0 {
            return prompt.say("Operation cancelled");
        }

        let Some(current) = repo.find_by_id(id) else {
            prompt.warn(&format!("No task with id {id}"))?;
            continue;
        };
        table::show(prompt, std::slice::from_ref(&current))?;

        let title = match prompt.line("New title [ENTER keeps current]: ")? {
            None => return Ok(()),
            Some(raw) => raw.parse().unwrap_or_else(|_| current.title.clone()),
        };
        let description = match prompt.line("New description [ENTER keeps current]: ")? {
            None => return Ok(()),
            Some(raw) if raw.is_empty() => current.description.clone(),
            Some(raw) => raw,
        };
        let priority = prompt.read_priority(current.priority)?;
        let status = prompt.read_status_toggle(current.status)?;

        let updated = Task {
            id: current.id,
            title,
            description,
            priority,
            status,
            created_at: current.created_at,
        };
        return if repo.update(&updated) {
            prompt.success("Task updated")
        } else {
            prompt.warn("No task was updated")
        };
    }
}

pub fn delete<R: BufRead, W: Write>(repo: &TaskRepo, prompt: &mut Prompt<R, W>) -> io::Result<()> {
    loop {
        let Some(id) = prompt.read_number::<i64>("Id of the task to delete (0=Cancel): ")? else {
            return Ok(());
        };
        if id == 0 {
            return prompt.say("Operation cancelled");
        }

        let Some(task) = repo.find_by_id(id) else {
            prompt.warn(&format!("No task with id {id}"))?;
            continue;
        };

        if !prompt.confirm(&format!("Delete task \"{}\"? (y/n): ", task.title))? {
            return prompt.say("Operation cancelled");
        }

        return if repo.delete(id) {
            prompt.success("Task deleted")
        } else {
            prompt.warn("No task was deleted, check the data and try again")
        };
    }
}

pub fn filter<R: BufRead, W: Write>(repo: &TaskRepo, prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let criteria = prompt.read_filter()?;
    if criteria.is_empty() {
        return prompt.say("Operation cancelled, no filter applied");
    }

    let order = if prompt.confirm("Order the results? (y/n): ")? {
        prompt.read_order()?
    } else {
        None
    };

    table::show(prompt, &repo.filter(&criteria, order))
}
