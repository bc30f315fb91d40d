/// The listing form store
///
/// Holds the draft and the submission phase. Every field update goes
/// through here so the validators run before anything is committed.

use super::data::{Listing, ListingDraft, MediaItem};
use super::validation::{self, DESCRIPTION_LIMIT_MESSAGE};
use crate::notify::{Notifier, NotifyKind};

/// Where the form is in its lifecycle
///
/// There is no terminal phase: after a submission finishes the next edit
/// moves back to `Editing`, and the form can be submitted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
    SubmitSucceeded,
    SubmitFailed,
}

/// Outcome of a field update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Applied,
    Rejected,
}

/// Form state for a single listing
#[derive(Debug, Default)]
pub struct ListingForm {
    draft: ListingDraft,
    /// Index of the image shown in the preview (single-image form, always 0)
    current_image_index: usize,
    phase: FormPhase,
}

impl ListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn current_image_index(&self) -> usize {
        self.current_image_index
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Titles are free text
    pub fn set_title(&mut self, title: String) -> FieldUpdate {
        self.draft.title = title;
        self.touch();
        FieldUpdate::Applied
    }

    /// Commit a price if it passes validation, otherwise drop it silently
    pub fn set_price(&mut self, price: String) -> FieldUpdate {
        if !validation::validate_price(&price) {
            tracing::debug!(input = %price, "price keystroke rejected");
            return FieldUpdate::Rejected;
        }

        self.draft.price = price;
        self.touch();
        FieldUpdate::Applied
    }

    /// Commit a description if it stays within the word limit
    ///
    /// Over the limit, the user is notified and the previous text is kept.
    pub fn set_description(&mut self, description: String, notifier: &mut impl Notifier) -> FieldUpdate {
        if !validation::validate_description(&description) {
            notifier.notify(DESCRIPTION_LIMIT_MESSAGE, NotifyKind::Error);
            return FieldUpdate::Rejected;
        }

        self.draft.description = description;
        self.touch();
        FieldUpdate::Applied
    }

    /// Attach media, returning whatever it replaced
    ///
    /// The caller owns the returned item's object URL and must release it.
    pub fn set_media(&mut self, media: MediaItem) -> Option<MediaItem> {
        self.current_image_index = 0;
        self.touch();
        self.draft.media.replace(media)
    }

    /// Detach media, returning it so its object URL can be released
    pub fn remove_media(&mut self) -> Option<MediaItem> {
        self.current_image_index = 0;
        self.touch();
        self.draft.media.take()
    }

    /// Move to `Submitting` and snapshot the listing to send
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Listing> {
        if self.is_submitting() {
            tracing::debug!("submit ignored, a submission is already in flight");
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(Listing::from_draft(&self.draft))
    }

    /// Record the outcome of the in-flight submission
    ///
    /// The draft is left as it is either way.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.phase = if succeeded {
            FormPhase::SubmitSucceeded
        } else {
            FormPhase::SubmitFailed
        };
    }

    /// Any edit outside of an in-flight submission returns the form to `Editing`
    fn touch(&mut self) {
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationCenter;
    use crate::state::data::{MediaKind, MEDIA_ASPECT_RATIO};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ListingForm::new();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft(), &ListingDraft::default());
        assert_eq!(form.current_image_index(), 0);
    }

    #[test]
    fn test_price_keystrokes_are_gated() {
        let mut form = ListingForm::new();

        assert_eq!(form.set_price("12.5".to_string()), FieldUpdate::Applied);
        assert_eq!(form.set_price("12.555".to_string()), FieldUpdate::Rejected);
        assert_eq!(form.draft().price, "12.5");

        assert_eq!(form.set_price("123456789".to_string()), FieldUpdate::Rejected);
        assert_eq!(form.draft().price, "12.5");

        assert_eq!(form.set_price(String::new()), FieldUpdate::Applied);
        assert_eq!(form.draft().price, "");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_rejected_price_leaves_form_untouched() {
        let mut form = ListingForm::new();

        form.set_price("abc".to_string());

        assert_eq!(form.draft().price, "");
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_description_over_limit_notifies_and_keeps_previous() {
        let mut form = ListingForm::new();
        let mut center = NotificationCenter::new();

        assert_eq!(form.set_description(words(150), &mut center), FieldUpdate::Applied);
        assert!(center.is_empty());

        let update = form.set_description(words(151), &mut center);

        assert_eq!(update, FieldUpdate::Rejected);
        assert_eq!(form.draft().description, words(150));
        let latest = center.visible().next().expect("limit notification");
        assert_eq!(latest.message, DESCRIPTION_LIMIT_MESSAGE);
        assert_eq!(latest.kind, NotifyKind::Error);
    }

    #[test]
    fn test_media_replace_and_remove_hand_back_previous() {
        let mut form = ListingForm::new();

        assert!(form.set_media(MediaItem::image("blob:a")).is_none());
        let media = form.draft().media.clone().expect("media set");
        assert_eq!(media.kind, MediaKind::Image);
        assert_eq!(media.aspect_ratio, MEDIA_ASPECT_RATIO);

        let replaced = form.set_media(MediaItem::image("blob:b"));
        assert_eq!(replaced.map(|m| m.url), Some("blob:a".to_string()));

        let removed = form.remove_media();
        assert_eq!(removed.map(|m| m.url), Some("blob:b".to_string()));
        assert!(form.draft().media.is_none());
        assert!(form.remove_media().is_none());
    }

    #[test]
    fn test_submit_snapshots_current_draft() {
        let mut form = ListingForm::new();
        let mut center = NotificationCenter::new();
        form.set_title("Lamp".to_string());
        form.set_price("40".to_string());
        form.set_description("brass desk lamp".to_string(), &mut center);

        let listing = form.begin_submit().expect("first submit starts");

        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(listing.title, "Lamp");
        assert_eq!(listing.price, "40");
        assert_eq!(listing.description, "brass desk lamp");
        assert!(listing.media.is_none());
    }

    #[test]
    fn test_double_submit_is_refused_while_in_flight() {
        let mut form = ListingForm::new();

        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());

        // Edits during the request do not leave the submitting phase
        form.set_title("still typing".to_string());
        assert!(form.is_submitting());

        form.finish_submit(false);
        assert_eq!(form.phase(), FormPhase::SubmitFailed);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_finished_form_returns_to_editing_and_keeps_draft() {
        let mut form = ListingForm::new();
        form.set_title("Chair".to_string());
        form.begin_submit();
        form.finish_submit(true);

        assert_eq!(form.phase(), FormPhase::SubmitSucceeded);
        assert_eq!(form.draft().title, "Chair");

        form.set_title("Chair, oak".to_string());
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
