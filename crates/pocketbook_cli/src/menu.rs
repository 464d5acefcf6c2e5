//! Interactive text menus for notes, tasks and contacts.
//!
//! # Responsibility
//! - Translate menu choices into service calls.
//! - Turn store outcomes into user-facing messages.
//!
//! # Invariants
//! - Store errors are reported and the menu keeps running.
//! - End of input leaves every menu and ends the session.

use crate::console::Console;
use log::warn;
use pocketbook_core::model::task::status_label;
use pocketbook_core::{
    Contact, ContactPatch, ContactService, ExportOutcome, Note, NotePatch, NoteService,
    Pocketbook, Priority, RecordId, StoreError, Task, TaskFilter, TaskPatch, TaskService,
};
use std::io::{self, BufRead, Write};

const MAIN_MENU: &str = "\n=== Pocketbook ===
1. Notes
2. Tasks
3. Contacts
0. Exit";

const NOTES_MENU: &str = "\n--- Notes ---
1. Add note
2. List notes
3. View note
4. Edit note
5. Delete note
6. Search notes
7. Export to CSV
8. Import from CSV
0. Back";

const TASKS_MENU: &str = "\n--- Tasks ---
1. Add task
2. List tasks
3. View task
4. Edit task
5. Mark task as done
6. Delete task
7. Filter by status
8. Export to CSV
9. Import from CSV
0. Back";

const CONTACTS_MENU: &str = "\n--- Contacts ---
1. Add contact
2. List contacts
3. View contact
4. Edit contact
5. Delete contact
6. Search contacts
7. Export to CSV
8. Import from CSV
0. Back";

/// How a submenu ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    Quit,
}

/// Runs the main menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut Pocketbook,
) -> io::Result<()> {
    loop {
        console.say(MAIN_MENU)?;
        let Some(choice) = console.read_line("Choose an option: ")? else {
            return Ok(());
        };
        let flow = match choice.trim() {
            "1" => notes_menu(console, &mut book.notes)?,
            "2" => tasks_menu(console, &mut book.tasks)?,
            "3" => contacts_menu(console, &mut book.contacts)?,
            "0" => {
                console.say("Goodbye!")?;
                return Ok(());
            }
            _ => {
                console.say("Invalid choice, try again.")?;
                Flow::Back
            }
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn notes_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    notes: &mut NoteService,
) -> io::Result<Flow> {
    loop {
        console.say(NOTES_MENU)?;
        let Some(choice) = console.read_line("Choose an option: ")? else {
            return Ok(Flow::Quit);
        };
        match choice.trim() {
            "1" => {
                let title = console.ask("Title: ")?;
                let content = console.ask("Content: ")?;
                match notes.add_note(title, content) {
                    Ok(note) => console.say(format!("Note added with ID {}.", note.id))?,
                    Err(err) => report(console, "Note", &err)?,
                }
            }
            "2" => {
                if notes.list_notes().is_empty() {
                    console.say("No notes yet.")?;
                }
                for note in notes.list_notes() {
                    console.say(note_summary(note))?;
                }
            }
            "3" => {
                if let Some(id) = console.ask_id("Note ID: ")? {
                    match notes.get_note(id) {
                        Some(note) => console.say(note_details(note))?,
                        None => console.say(not_found("Note", id))?,
                    }
                }
            }
            "4" => {
                if let Some(id) = console.ask_id("Note ID: ")? {
                    if notes.get_note(id).is_none() {
                        console.say(not_found("Note", id))?;
                        continue;
                    }
                    let patch = NotePatch {
                        title: console.ask_change("New title")?,
                        content: console.ask_change("New content")?,
                    };
                    match notes.edit_note(id, patch) {
                        Ok(_) => console.say("Note updated.")?,
                        Err(err) => report(console, "Note", &err)?,
                    }
                }
            }
            "5" => {
                if let Some(id) = console.ask_id("Note ID: ")? {
                    match notes.delete_note(id) {
                        Ok(_) => console.say("Note deleted.")?,
                        Err(err) => report(console, "Note", &err)?,
                    }
                }
            }
            "6" => {
                let query = console.ask("Search text: ")?;
                let hits = notes.search_notes(&query);
                if hits.is_empty() {
                    console.say("No matching notes.")?;
                }
                for note in hits {
                    console.say(note_summary(note))?;
                }
            }
            "7" => {
                let path = ask_path(console, "notes.csv")?;
                let outcome = notes.export_csv(&path);
                report_export(console, "notes", &path, outcome)?;
            }
            "8" => {
                let path = ask_path(console, "notes.csv")?;
                let outcome = notes.import_csv(&path);
                report_import(console, "notes", outcome)?;
            }
            "0" => return Ok(Flow::Back),
            _ => console.say("Invalid choice, try again.")?,
        }
    }
}

fn tasks_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: &mut TaskService,
) -> io::Result<Flow> {
    loop {
        console.say(TASKS_MENU)?;
        let Some(choice) = console.read_line("Choose an option: ")? else {
            return Ok(Flow::Quit);
        };
        match choice.trim() {
            "1" => {
                let title = console.ask("Title: ")?;
                let description = console.ask("Description: ")?;
                let priority = console.ask("Priority (High/Medium/Low): ")?;
                let priority = if priority.trim().is_empty() {
                    Priority::default()
                } else {
                    Priority::parse(&priority)
                };
                let due_date = console.ask("Due date (DD-MM-YYYY, blank for none): ")?;
                let due_date = Some(due_date).filter(|value| !value.trim().is_empty());
                match tasks.add_task(title, description, priority, due_date) {
                    Ok(task) => console.say(format!("Task added with ID {}.", task.id))?,
                    Err(err) => report(console, "Task", &err)?,
                }
            }
            "2" => list_tasks(console, tasks, TaskFilter::All)?,
            "3" => {
                if let Some(id) = console.ask_id("Task ID: ")? {
                    match tasks.get_task(id) {
                        Some(task) => console.say(task_details(task))?,
                        None => console.say(not_found("Task", id))?,
                    }
                }
            }
            "4" => {
                if let Some(id) = console.ask_id("Task ID: ")? {
                    if tasks.get_task(id).is_none() {
                        console.say(not_found("Task", id))?;
                        continue;
                    }
                    let title = console.ask_change("New title")?;
                    let description = console.ask_change("New description")?;
                    let priority = console
                        .ask_change("New priority (High/Medium/Low)")?
                        .map(|value| Priority::parse(&value));
                    let due_date = console
                        .ask_change("New due date (`-` to clear)")?
                        .map(|value| Some(value).filter(|date| date.trim() != "-"));
                    let patch = TaskPatch {
                        title,
                        description,
                        priority,
                        due_date,
                        done: None,
                    };
                    match tasks.edit_task(id, patch) {
                        Ok(_) => console.say("Task updated.")?,
                        Err(err) => report(console, "Task", &err)?,
                    }
                }
            }
            "5" => {
                if let Some(id) = console.ask_id("Task ID: ")? {
                    match tasks.mark_done(id) {
                        Ok(_) => console.say("Task marked as done.")?,
                        Err(err) => report(console, "Task", &err)?,
                    }
                }
            }
            "6" => {
                if let Some(id) = console.ask_id("Task ID: ")? {
                    match tasks.delete_task(id) {
                        Ok(_) => console.say("Task deleted.")?,
                        Err(err) => report(console, "Task", &err)?,
                    }
                }
            }
            "7" => {
                let answer = console.ask("Show 1) done or 2) not done tasks: ")?;
                match answer.trim() {
                    "1" => list_tasks(console, tasks, TaskFilter::Done)?,
                    "2" => list_tasks(console, tasks, TaskFilter::NotDone)?,
                    _ => console.say("Invalid choice, try again.")?,
                }
            }
            "8" => {
                let path = ask_path(console, "tasks.csv")?;
                let outcome = tasks.export_csv(&path);
                report_export(console, "tasks", &path, outcome)?;
            }
            "9" => {
                let path = ask_path(console, "tasks.csv")?;
                let outcome = tasks.import_csv(&path);
                report_import(console, "tasks", outcome)?;
            }
            "0" => return Ok(Flow::Back),
            _ => console.say("Invalid choice, try again.")?,
        }
    }
}

fn contacts_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    contacts: &mut ContactService,
) -> io::Result<Flow> {
    loop {
        console.say(CONTACTS_MENU)?;
        let Some(choice) = console.read_line("Choose an option: ")? else {
            return Ok(Flow::Quit);
        };
        match choice.trim() {
            "1" => {
                let name = console.ask("Name: ")?;
                let phone = console.ask("Phone: ")?;
                let mail = console.ask("E-mail: ")?;
                match contacts.add_contact(name, phone, mail) {
                    Ok(contact) => {
                        console.say(format!("Contact added with ID {}.", contact.id))?
                    }
                    Err(err) => report(console, "Contact", &err)?,
                }
            }
            "2" => {
                if contacts.list_contacts().is_empty() {
                    console.say("No contacts yet.")?;
                }
                for contact in contacts.list_contacts() {
                    console.say(contact_summary(contact))?;
                }
            }
            "3" => {
                if let Some(id) = console.ask_id("Contact ID: ")? {
                    match contacts.get_contact(id) {
                        Some(contact) => console.say(contact_summary(contact))?,
                        None => console.say(not_found("Contact", id))?,
                    }
                }
            }
            "4" => {
                if let Some(id) = console.ask_id("Contact ID: ")? {
                    if contacts.get_contact(id).is_none() {
                        console.say(not_found("Contact", id))?;
                        continue;
                    }
                    let patch = ContactPatch {
                        name: console.ask_change("New name")?,
                        phone: console.ask_change("New phone")?,
                        mail: console.ask_change("New e-mail")?,
                    };
                    match contacts.edit_contact(id, patch) {
                        Ok(_) => console.say("Contact updated.")?,
                        Err(err) => report(console, "Contact", &err)?,
                    }
                }
            }
            "5" => {
                if let Some(id) = console.ask_id("Contact ID: ")? {
                    match contacts.delete_contact(id) {
                        Ok(_) => console.say("Contact deleted.")?,
                        Err(err) => report(console, "Contact", &err)?,
                    }
                }
            }
            "6" => {
                let query = console.ask("Name or phone: ")?;
                let hits = contacts.search_contacts(&query);
                if hits.is_empty() {
                    console.say("No matching contacts.")?;
                }
                for contact in hits {
                    console.say(contact_summary(contact))?;
                }
            }
            "7" => {
                let path = ask_path(console, "contacts.csv")?;
                let outcome = contacts.export_csv(&path);
                report_export(console, "contacts", &path, outcome)?;
            }
            "8" => {
                let path = ask_path(console, "contacts.csv")?;
                let outcome = contacts.import_csv(&path);
                report_import(console, "contacts", outcome)?;
            }
            "0" => return Ok(Flow::Back),
            _ => console.say("Invalid choice, try again.")?,
        }
    }
}

fn list_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: &TaskService,
    filter: TaskFilter,
) -> io::Result<()> {
    let listed = tasks.list_tasks(filter);
    if listed.is_empty() {
        return console.say("No tasks to show.");
    }
    for task in listed {
        console.say(task_summary(task))?;
    }
    Ok(())
}

fn ask_path<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default_name: &str,
) -> io::Result<String> {
    let answer = console.ask(&format!("CSV file path [{default_name}]: "))?;
    let trimmed = answer.trim();
    Ok(if trimmed.is_empty() {
        default_name.to_string()
    } else {
        trimmed.to_string()
    })
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    entity: &str,
    err: &StoreError,
) -> io::Result<()> {
    match err {
        StoreError::NotFound(id) => console.say(not_found(entity, *id)),
        other => {
            warn!(
                "event=menu_action module=cli status=error entity={} error_code={}",
                entity.to_lowercase(),
                other.code()
            );
            console.say(format!("Error: {other}"))
        }
    }
}

fn report_export<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    collection: &str,
    path: &str,
    outcome: Result<ExportOutcome, StoreError>,
) -> io::Result<()> {
    match outcome {
        Ok(ExportOutcome::Written(rows)) => {
            console.say(format!("Exported {rows} {collection} to {path}."))
        }
        Ok(ExportOutcome::Empty) => console.say(format!("No {collection} to export.")),
        Err(err) => console.say(format!("Export failed: {err}")),
    }
}

fn report_import<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    collection: &str,
    outcome: Result<usize, StoreError>,
) -> io::Result<()> {
    match outcome {
        Ok(count) => console.say(format!("Imported {count} {collection}.")),
        Err(StoreError::FileNotFound(path)) => {
            console.say(format!("File not found: {}", path.display()))
        }
        Err(err) => console.say(format!("Import failed: {err}")),
    }
}

fn not_found(entity: &str, id: RecordId) -> String {
    format!("{entity} with ID {id} not found.")
}

fn note_summary(note: &Note) -> String {
    format!("[{}] {} ({})", note.id, note.title, note.timestamp)
}

fn note_details(note: &Note) -> String {
    format!(
        "ID: {}\nTitle: {}\nDate: {}\n\n{}",
        note.id, note.title, note.timestamp, note.content
    )
}

fn task_summary(task: &Task) -> String {
    let mark = if task.done { "x" } else { " " };
    let due = task
        .due_date
        .as_deref()
        .map(|date| format!(", due {date}"))
        .unwrap_or_default();
    format!("[{mark}] {}. {} ({}{due})", task.id, task.title, task.priority)
}

fn task_details(task: &Task) -> String {
    format!(
        "ID: {}\nTitle: {}\nDescription: {}\nStatus: {}\nPriority: {}\nDue date: {}",
        task.id,
        task.title,
        task.description,
        status_label(task.done),
        task.priority,
        task.due_date.as_deref().unwrap_or("-")
    )
}

fn contact_summary(contact: &Contact) -> String {
    format!(
        "{}. {} | {} | {}",
        contact.id, contact.name, contact.phone, contact.mail
    )
}
