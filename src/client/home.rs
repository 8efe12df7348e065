//! Home page: the post list with comments, deletion and inline editing.
//!
//! [`HomeState`] holds what is on screen and its pure transitions.
//! [`HomePage`] drives it against a [`PostApi`] and reports problems through
//! a [`Prompt`].

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use super::api::PostApi;
use super::optimistic::Tentative;
use super::session::Session;
use crate::web::dto::{CommentResponse, PostDraft, PostResponse};

/// Alert for commenting without a session token.
pub const LOGIN_TO_COMMENT: &str = "You must be logged in to comment.";
/// Alert for submitting a blank comment.
pub const EMPTY_COMMENT: &str = "Please write a comment before posting.";
/// Alert for a rejected comment.
pub const COMMENT_FAILED: &str = "Failed to post comment. Please try again.";
/// Alert for deleting without a session token.
pub const LOGIN_TO_DELETE: &str = "You must be logged in to delete a post.";
/// Confirmation asked before deleting.
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this post?";
/// Alert for a rejected delete.
pub const DELETE_FAILED: &str = "Unauthorized to delete this post";
/// Alert for editing without a session token.
pub const LOGIN_TO_EDIT: &str = "You must be logged in to edit a post.";
/// Alert for a rejected edit.
pub const UPDATE_FAILED: &str = "Failed to update post. Please try again.";

/// User-facing dialogs.
pub trait Prompt {
    /// Show a message.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Screen state of the home page.
#[derive(Debug, Clone)]
pub struct HomeState {
    posts: Vec<PostResponse>,
    loading: bool,
    comment_inputs: HashMap<i64, String>,
    editing: Option<i64>,
    draft: PostDraft,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    /// Initial state: loading, nothing fetched yet.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
            comment_inputs: HashMap::new(),
            editing: None,
            draft: PostDraft::default(),
        }
    }

    /// Posts in display order.
    pub fn posts(&self) -> &[PostResponse] {
        &self.posts
    }

    /// Find a post by ID.
    pub fn post(&self, post_id: i64) -> Option<&PostResponse> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Whether the initial fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Finish loading with the fetched posts (empty on failure).
    pub fn finish_loading(&mut self, posts: Vec<PostResponse>) {
        self.posts = posts;
        self.loading = false;
    }

    /// The comment being typed for a post.
    pub fn comment_input(&self, post_id: i64) -> &str {
        self.comment_inputs
            .get(&post_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the comment being typed for a post.
    pub fn set_comment_input(&mut self, post_id: i64, text: impl Into<String>) {
        self.comment_inputs.insert(post_id, text.into());
    }

    /// Append a created comment to its post and clear that post's input.
    pub fn append_comment(&mut self, comment: CommentResponse) {
        self.comment_inputs.remove(&comment.post_id);
        match self.posts.iter_mut().find(|p| p.id == comment.post_id) {
            Some(post) => post.comments.push(comment),
            None => debug!(post_id = comment.post_id, "Comment for a post no longer listed"),
        }
    }

    /// The post currently in edit mode.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// The edit draft.
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Put a post in edit mode, seeding the draft from it.
    ///
    /// Any other post leaves edit mode. Returns false if the post is not
    /// listed.
    pub fn begin_edit(&mut self, post_id: i64) -> bool {
        let Some(post) = self.post(post_id) else {
            return false;
        };
        self.draft = PostDraft::new(post.title.clone(), post.content.clone());
        self.editing = Some(post_id);
        true
    }

    /// Update the draft title.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Update the draft content.
    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = PostDraft::default();
    }

    /// Apply a saved edit: only `title` and `content` of the post change.
    pub fn finish_edit(&mut self, post_id: i64, title: String, content: String) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            post.title = title;
            post.content = content;
        }
        self.cancel_edit();
    }
}

impl fmt::Display for HomeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            return writeln!(f, "Loading posts...");
        }
        if self.posts.is_empty() {
            return writeln!(f, "No posts available.");
        }

        for post in &self.posts {
            if self.editing == Some(post.id) {
                writeln!(f, "[editing] {}", self.draft.title)?;
                writeln!(f, "{}", self.draft.content)?;
            } else {
                writeln!(f, "{}", post.title)?;
                writeln!(f, "{}", post.content)?;
            }
            writeln!(f, "by {}", post.username)?;

            if post.comments.is_empty() {
                writeln!(f, "  No comments yet.")?;
            }
            for comment in &post.comments {
                writeln!(f, "  {}: {}", comment.username, comment.content)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Home page controller.
pub struct HomePage<A, P> {
    api: A,
    prompt: P,
    state: HomeState,
}

impl<A: PostApi, P: Prompt> HomePage<A, P> {
    /// Create a page in the loading state.
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            state: HomeState::new(),
        }
    }

    /// Current screen state.
    pub fn state(&self) -> &HomeState {
        &self.state
    }

    /// The prompt used for dialogs.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// The API the page talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the post list once. Loading ends whether or not the fetch
    /// succeeds.
    pub async fn load(&mut self) {
        let posts = match self.api.list_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                warn!(error = %e, "Failed to fetch posts");
                Vec::new()
            }
        };
        self.state.finish_loading(posts);
    }

    /// Set the comment being typed for a post.
    pub fn set_comment_input(&mut self, post_id: i64, text: impl Into<String>) {
        self.state.set_comment_input(post_id, text);
    }

    /// Submit the typed comment for a post, trimmed.
    pub async fn submit_comment(&mut self, session: &Session, post_id: i64) {
        let Some(token) = session.token() else {
            self.prompt.alert(LOGIN_TO_COMMENT);
            return;
        };

        let content = self.state.comment_input(post_id).trim().to_string();
        if content.is_empty() {
            self.prompt.alert(EMPTY_COMMENT);
            return;
        }

        match self.api.create_comment(token, post_id, &content).await {
            Ok(comment) => self.state.append_comment(comment),
            Err(e) => {
                warn!(post_id, error = %e, "Failed to post comment");
                self.prompt.alert(COMMENT_FAILED);
            }
        }
    }

    /// Delete a post after confirmation.
    ///
    /// The post disappears from the list before the request is sent; a failed
    /// request restores the previous list exactly.
    pub async fn delete_post(&mut self, session: &Session, post_id: i64) {
        let Some(token) = session.token() else {
            self.prompt.alert(LOGIN_TO_DELETE);
            return;
        };
        if !self.prompt.confirm(CONFIRM_DELETE) {
            return;
        }

        let removal = Tentative::apply(&mut self.state.posts, |posts| {
            posts.retain(|p| p.id != post_id)
        });

        match self.api.delete_post(token, post_id).await {
            Ok(()) => removal.commit(),
            Err(e) => {
                warn!(post_id, error = %e, "Failed to delete post");
                removal.rollback(&mut self.state.posts);
                self.prompt.alert(DELETE_FAILED);
            }
        }
    }

    /// Put a post in edit mode.
    pub fn begin_edit(&mut self, post_id: i64) {
        if !self.state.begin_edit(post_id) {
            debug!(post_id, "Edit requested for a post not in the list");
        }
    }

    /// Update the draft title.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.state.set_draft_title(title);
    }

    /// Update the draft content.
    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.state.set_draft_content(content);
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// Send the draft for a post. On failure the page stays in edit mode.
    pub async fn save_edit(&mut self, session: &Session, post_id: i64) {
        let Some(token) = session.token() else {
            self.prompt.alert(LOGIN_TO_EDIT);
            return;
        };
        if self.state.editing != Some(post_id) {
            debug!(post_id, "Save requested for a post not in edit mode");
            return;
        }

        let result = self.api.update_post(token, post_id, &self.state.draft).await;
        match result {
            Ok(updated) => self
                .state
                .finish_edit(post_id, updated.title, updated.content),
            Err(e) => {
                warn!(post_id, error = %e, "Failed to update post");
                self.prompt.alert(UPDATE_FAILED);
            }
        }
    }
}
