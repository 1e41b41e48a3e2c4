use crate::models::social::ItemType;
use crate::models::{
    Comment, CommentForm, CommentWithUser, Like, LikeStatusResponse, LikeToggleResponse,
    ServiceError,
};
use crate::repositories::{CommentRepository, LikeRepository};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct SocialService {
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl SocialService {
    pub fn new(comments: Arc<dyn CommentRepository>, likes: Arc<dyn LikeRepository>) -> Self {
        Self { comments, likes }
    }

    /// Two-level fetch: top-level comments newest first, each with its direct
    /// replies oldest first. Deeper chains are stored but never surfaced.
    pub async fn list_comments(
        &self,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Vec<CommentWithUser>, ServiceError> {
        let top_level = self.comments.find_top_level(item_type, item_id).await?;

        let mut result = Vec::with_capacity(top_level.len());
        for (comment, user) in top_level {
            let replies = self
                .comments
                .find_replies(&comment.id)
                .await?
                .into_iter()
                .map(|(reply, reply_user)| CommentWithUser {
                    comment: reply,
                    user: reply_user,
                    replies: Vec::new(),
                })
                .collect();

            result.push(CommentWithUser {
                comment,
                user,
                replies,
            });
        }

        Ok(result)
    }

    /// No existence check on item_id: items are never hard-referenced, so a
    /// comment on a deleted item is tolerated rather than rejected.
    pub async fn create_comment(
        &self,
        user_id: &str,
        form: CommentForm,
    ) -> Result<Comment, ServiceError> {
        if form.content.trim().is_empty() {
            return Err(ServiceError::validation("content must not be empty"));
        }

        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            item_type: form.item_type,
            item_id: form.item_id,
            content: form.content,
            parent_id: form.parent_id,
            created_at: now,
            updated_at: now,
        };

        self.comments.insert(&comment).await?;
        tracing::info!(
            "Created comment {} on {} {}",
            comment.id,
            comment.item_type,
            comment.item_id
        );

        Ok(comment)
    }

    pub async fn delete_comment(&self, id: &str) -> Result<(), ServiceError> {
        let deleted = self.comments.delete(id).await?;
        if deleted == 0 {
            return Err(ServiceError::NotFound("Comment not found".to_string()));
        }

        tracing::info!("Deleted comment {}", id);
        Ok(())
    }

    pub async fn recent_comments(&self, limit: i64) -> Result<Vec<CommentWithUser>, ServiceError> {
        let comments = self.comments.find_recent(limit).await?;

        Ok(comments
            .into_iter()
            .map(|(comment, user)| CommentWithUser {
                comment,
                user,
                replies: Vec::new(),
            })
            .collect())
    }

    /// Flip the like presence for (user, item) and report the new state with
    /// a fresh count. The insert is guarded by the uniqueness constraint, so
    /// the toggle outcome is decided by whether the insert took effect.
    pub async fn toggle_like(
        &self,
        user_id: &str,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<LikeToggleResponse, ServiceError> {
        let like = Like {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            item_type,
            item_id: item_id.to_string(),
            created_at: Utc::now(),
        };

        let liked = self.likes.insert_if_absent(&like).await?;
        if !liked {
            self.likes.delete_for(user_id, item_type, item_id).await?;
        }

        let count = self.likes.count_for(item_type, item_id).await?;

        Ok(LikeToggleResponse { liked, count })
    }

    pub async fn like_status(
        &self,
        item_type: ItemType,
        item_id: &str,
        viewer: Option<&str>,
    ) -> Result<LikeStatusResponse, ServiceError> {
        let count = self.likes.count_for(item_type, item_id).await?;

        let user_liked = match viewer {
            Some(user_id) => self.likes.exists_for(user_id, item_type, item_id).await?,
            None => false,
        };

        Ok(LikeStatusResponse { count, user_liked })
    }
}
