use std::io::Write;

use crate::gmail_api::MailApi;

/// One page per action; results beyond this are left for the next run.
pub const BATCH_SIZE: u32 = 500;

/// Gmail's fixed inbox categories, selectable by menu digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Primary,
    Social,
    Promotions,
    Updates,
    Forums,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Primary,
        Category::Social,
        Category::Promotions,
        Category::Updates,
        Category::Forums,
    ];

    /// Map a menu digit ("1".."5") to a category.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Category::Primary),
            "2" => Some(Category::Social),
            "3" => Some(Category::Promotions),
            "4" => Some(Category::Updates),
            "5" => Some(Category::Forums),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Social => "social",
            Category::Promotions => "promotions",
            Category::Updates => "updates",
            Category::Forums => "forums",
        }
    }
}

/// System folders that get emptied rather than searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    Trash,
    Spam,
}

impl Folder {
    pub fn label_id(&self) -> &'static str {
        match self {
            Folder::Trash => "TRASH",
            Folder::Spam => "SPAM",
        }
    }
}

/// What to do with each matched message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Trash,
    PermanentDelete,
}

/// One criterion per menu action. Folder selections are permanent deletes;
/// everything else moves matches to trash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Everything,
    Category(Category),
    Sender(String),
    Filter(String),
    Folder(Folder),
}

impl Selection {
    pub fn action_kind(&self) -> ActionKind {
        match self {
            Selection::Folder(_) => ActionKind::PermanentDelete,
            _ => ActionKind::Trash,
        }
    }

    /// Gmail search query for this selection, if it uses one.
    pub fn query(&self) -> Option<String> {
        match self {
            Selection::Everything | Selection::Folder(_) => None,
            Selection::Category(category) => Some(format!("category:{}", category.name())),
            Selection::Sender(sender) => Some(format!("from:{}", sender)),
            Selection::Filter(filter) => Some(filter.clone()),
        }
    }

    /// Label filter for this selection, if it uses one.
    pub fn label_id(&self) -> Option<&'static str> {
        match self {
            Selection::Folder(folder) => Some(folder.label_id()),
            _ => None,
        }
    }

    fn searching_message(&self) -> Option<&'static str> {
        match self {
            Selection::Folder(Folder::Trash) => Some("Searching for emails in Trash..."),
            Selection::Folder(Folder::Spam) => Some("Searching for spam emails..."),
            _ => None,
        }
    }

    fn empty_message(&self) -> String {
        match self {
            Selection::Everything => "No emails to delete.".to_string(),
            Selection::Category(category) => format!("No emails found in {}.", category.name()),
            Selection::Sender(_) => "No emails found for this sender.".to_string(),
            Selection::Filter(_) => "No emails found for this filter.".to_string(),
            Selection::Folder(Folder::Trash) => "Trash is already empty.".to_string(),
            Selection::Folder(Folder::Spam) => "No spam emails found.".to_string(),
        }
    }

    fn found_message(&self, count: usize) -> String {
        match self {
            Selection::Category(category) => {
                format!("{} emails found in {}. Deleting...", count, category.name())
            }
            Selection::Folder(Folder::Trash) => {
                format!("{} emails found in Trash. Deleting permanently...", count)
            }
            Selection::Folder(Folder::Spam) => {
                format!("{} spam emails found. Deleting permanently...", count)
            }
            _ => format!("{} emails found. Deleting...", count),
        }
    }

    fn done_message(&self) -> String {
        match self {
            Selection::Everything => "All emails have been moved to trash.".to_string(),
            Selection::Category(category) => {
                format!("All emails in {} have been moved to trash.", category.name())
            }
            Selection::Sender(_) => "Deletion complete.".to_string(),
            Selection::Filter(_) => "All filtered emails have been moved to trash.".to_string(),
            Selection::Folder(Folder::Trash) => "Trash has been emptied.".to_string(),
            Selection::Folder(Folder::Spam) => {
                "All spam emails have been permanently deleted.".to_string()
            }
        }
    }
}

/// Fetch one page of matches for `selection` and apply its action to each
/// id in list order, one request per message. API errors end the batch
/// early; whatever was already trashed or deleted stays that way. Errors
/// are reported here rather than propagated so the menu loop keeps going.
pub async fn run_batch_action<A, W>(
    api: &A,
    selection: &Selection,
    out: &mut W,
) -> std::io::Result<()>
where
    A: MailApi + ?Sized,
    W: Write + ?Sized,
{
    if let Some(msg) = selection.searching_message() {
        writeln!(out, "{}", msg)?;
    }

    let ids = match api
        .list_message_ids(
            selection.query(),
            selection.label_id().map(str::to_string),
            BATCH_SIZE,
        )
        .await
    {
        Ok(ids) => ids,
        Err(error) => {
            writeln!(out, "API Error: {}", error)?;
            return Ok(());
        }
    };

    if ids.is_empty() {
        writeln!(out, "{}", selection.empty_message())?;
        return Ok(());
    }
    writeln!(out, "{}", selection.found_message(ids.len()))?;

    for id in &ids {
        let result = match selection.action_kind() {
            ActionKind::Trash => api.trash_message(id).await,
            ActionKind::PermanentDelete => api.delete_message(id).await,
        };
        if let Err(error) = result {
            writeln!(out, "API Error: {}", error)?;
            return Ok(());
        }
    }

    writeln!(out, "{}", selection.done_message())?;
    Ok(())
}
