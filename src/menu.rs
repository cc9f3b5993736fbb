use std::io::{BufRead, Write};

use crate::actions::{run_batch_action, Category, Folder, Selection};
use crate::gmail_api::MailApi;

/// What the main menu loop decided after one pass.
enum MenuOutcome {
    Continue,
    Exit,
}

/// Run the interactive menu until the user picks Exit or input ends.
/// Generic over reader and writer so tests can script a whole session.
pub async fn run_menu<A, R, W>(api: &A, input: &mut R, out: &mut W) -> std::io::Result<()>
where
    A: MailApi + ?Sized,
    R: BufRead,
    W: Write + ?Sized,
{
    loop {
        print_menu(out)?;
        let choice = match read_trimmed_line(input, out, "Choose an option: ")? {
            Some(line) => line,
            None => return Ok(()), // stdin closed
        };

        match dispatch(api, &choice, input, out).await? {
            MenuOutcome::Continue => {}
            MenuOutcome::Exit => return Ok(()),
        }
    }
}

fn print_menu<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "MailSweep")?;
    writeln!(out, "1 - Delete All")?;
    writeln!(out, "2 - Delete Mail from Category")?;
    writeln!(out, "3 - Delete Mail from User")?;
    writeln!(out, "4 - Empty Trash")?;
    writeln!(out, "5 - Empty Spam")?;
    writeln!(out, "6 - Delete Mail from Filter")?;
    writeln!(out, "7 - Exit")?;
    Ok(())
}

async fn dispatch<A, R, W>(
    api: &A,
    choice: &str,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<MenuOutcome>
where
    A: MailApi + ?Sized,
    R: BufRead,
    W: Write + ?Sized,
{
    match choice {
        "1" => run_batch_action(api, &Selection::Everything, out).await?,
        "2" => {
            if let Some(selection) = prompt_category(input, out)? {
                run_batch_action(api, &selection, out).await?;
            }
        }
        "3" => {
            if let Some(selection) = prompt_sender(input, out)? {
                run_batch_action(api, &selection, out).await?;
            }
        }
        "4" => run_batch_action(api, &Selection::Folder(Folder::Trash), out).await?,
        "5" => run_batch_action(api, &Selection::Folder(Folder::Spam), out).await?,
        "6" => {
            if let Some(selection) = prompt_filter(input, out)? {
                run_batch_action(api, &selection, out).await?;
            }
        }
        "7" => {
            writeln!(out, "Exiting MailSweep. Goodbye!")?;
            return Ok(MenuOutcome::Exit);
        }
        _ => writeln!(out, "Invalid option. Please try again.")?,
    }
    Ok(MenuOutcome::Continue)
}

/// Category sub-menu. An invalid digit aborts the action before any API
/// call is made.
fn prompt_category<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
) -> std::io::Result<Option<Selection>> {
    writeln!(out, "Choose a category:")?;
    for (index, category) in Category::ALL.iter().enumerate() {
        writeln!(out, "{}: {}", index + 1, category.name())?;
    }

    let choice = match read_trimmed_line(input, out, "Enter the number of the category: ")? {
        Some(line) => line,
        None => return Ok(None),
    };
    match Category::from_choice(&choice) {
        Some(category) => Ok(Some(Selection::Category(category))),
        None => {
            writeln!(out, "Invalid choice.")?;
            Ok(None)
        }
    }
}

/// Sender prompt. Empty input aborts before any API call is made.
fn prompt_sender<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
) -> std::io::Result<Option<Selection>> {
    let sender = match read_trimmed_line(
        input,
        out,
        "Enter the sender's email address to delete messages from: ",
    )? {
        Some(line) => line,
        None => return Ok(None),
    };
    if sender.is_empty() {
        writeln!(out, "No email address entered.")?;
        return Ok(None);
    }
    Ok(Some(Selection::Sender(sender)))
}

/// Filter prompt. The query is passed to Gmail verbatim; empty input
/// aborts before any API call is made.
fn prompt_filter<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
) -> std::io::Result<Option<Selection>> {
    let filter = match read_trimmed_line(input, out, "Enter your custom Gmail search query: ")? {
        Some(line) => line,
        None => return Ok(None),
    };
    if filter.is_empty() {
        writeln!(out, "No query entered.")?;
        return Ok(None);
    }
    Ok(Some(Selection::Filter(filter)))
}

/// Print a prompt, then read one line and trim it. `None` means end of
/// input.
fn read_trimmed_line<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
