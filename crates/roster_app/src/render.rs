//! Turns controller snapshots into terminal text.
//!
//! Pure string builders so the formatting is unit-testable; `main` does the
//! actual printing.

use std::fmt::Write;

use roster_core::{DetailStatus, DetailView, FeedStatus, FeedView};

pub fn list_screen(view: &FeedView) -> String {
    let mut out = String::new();

    if view.profiles.is_empty() && matches!(view.status, FeedStatus::Exhausted) {
        out.push_str("No profiles found\n");
        return out;
    }

    for profile in &view.profiles {
        let _ = writeln!(out, "  {} <{}>", profile.name, profile.email);
    }

    if view.refreshing {
        out.push_str("Refreshing...\n");
        return out;
    }
    match &view.status {
        FeedStatus::Loading => out.push_str("Loading profiles...\n"),
        FeedStatus::Error(message) => {
            let _ = writeln!(out, "{message}");
            out.push_str("Type `retry` to try again.\n");
        }
        FeedStatus::Exhausted => out.push_str("-- end of list --\n"),
        FeedStatus::Idle => {
            let _ = writeln!(out, "{} profiles loaded; `more` for the next page.", view.profiles.len());
        }
    }
    out
}

pub fn detail_screen(view: &DetailView) -> String {
    match &view.status {
        DetailStatus::Loading => "Loading profile...\n".to_string(),
        DetailStatus::Error(message) => {
            format!("{message}\nRun `show <id>` again to retry.\n")
        }
        DetailStatus::Loaded => match &view.profile {
            Some(profile) => {
                let mut out = String::new();
                let _ = writeln!(out, "{}", profile.name);
                let _ = writeln!(out, "  Email: {}", profile.email);
                if let Some(age) = profile.age {
                    let _ = writeln!(out, "  Age:   {age}");
                }
                if let Some(phone) = &profile.phone {
                    let _ = writeln!(out, "  Phone: {phone}");
                }
                if let Some(bio) = &profile.bio {
                    let _ = writeln!(out, "  Bio:   {bio}");
                }
                out
            }
            None => "Profile not found\n".to_string(),
        },
        DetailStatus::NotLoaded => "Profile not found\n".to_string(),
    }
}

pub fn help_screen() -> &'static str {
    "Commands:\n\
     \x20 more        load the next page of profiles\n\
     \x20 retry       retry after a failed page load\n\
     \x20 refresh     clear the list and reload from page 1\n\
     \x20 show <id>   fetch one profile by id\n\
     \x20 quit        exit\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_api::Profile;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Person {id}"),
            email: format!("{id}@example.com"),
            age: None,
            phone: None,
            bio: None,
        }
    }

    #[test]
    fn empty_exhausted_list_shows_the_empty_state() {
        let view = FeedView {
            profiles: Vec::new(),
            status: FeedStatus::Exhausted,
            refreshing: false,
            next_page: 1,
        };
        assert_eq!(list_screen(&view), "No profiles found\n");
    }

    #[test]
    fn list_rows_show_name_and_email() {
        let view = FeedView {
            profiles: vec![profile("1")],
            status: FeedStatus::Idle,
            refreshing: false,
            next_page: 2,
        };
        let screen = list_screen(&view);
        assert!(screen.contains("Person 1 <1@example.com>"));
    }

    #[test]
    fn list_error_includes_retry_hint() {
        let view = FeedView {
            profiles: vec![profile("1")],
            status: FeedStatus::Error("Server error. Please try again later.".to_string()),
            refreshing: false,
            next_page: 2,
        };
        let screen = list_screen(&view);
        assert!(screen.contains("Server error. Please try again later."));
        assert!(screen.contains("retry"));
    }

    #[test]
    fn detail_card_skips_absent_optional_fields() {
        let mut record = profile("9");
        record.bio = Some("Writes tests.".to_string());
        let view = DetailView {
            profile: Some(record),
            status: DetailStatus::Loaded,
        };
        let screen = detail_screen(&view);
        assert!(screen.contains("Email: 9@example.com"));
        assert!(screen.contains("Bio:   Writes tests."));
        assert!(!screen.contains("Phone:"));
        assert!(!screen.contains("Age:"));
    }

    #[test]
    fn detail_error_shows_the_classified_message() {
        let view = DetailView {
            profile: None,
            status: DetailStatus::Error("Resource not found.".to_string()),
        };
        let screen = detail_screen(&view);
        assert!(screen.starts_with("Resource not found."));
    }
}
