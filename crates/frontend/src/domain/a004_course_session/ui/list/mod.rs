use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{or_dash, short_date};
use contracts::domain::a004_course_session::{CourseSessionDto, SESSION_TYPES};
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const COURSE_SESSIONS: Endpoint<CourseSessionDto> = Endpoint::new("/course-sessions");

pub fn session_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("type", "نوع برگزاری", SESSION_TYPES),
        FilterDeclaration::search("courseTitle", "عنوان دوره"),
    ]
}

/// Занятия программы курса
#[component]
#[allow(non_snake_case)]
pub fn CourseSessionList() -> impl IntoView {
    view! {
        <GeneralList
            query=COURSE_SESSIONS
            filters=session_filters()
            render_item=Callback::new(|session: CourseSessionDto| {
                view! { <CourseSessionRow session=session /> }.into_any()
            })
            title="جلسات دوره"
            search_placeholder="جستجو در عنوان جلسه"
            sort_by="startsAt:asc"
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn CourseSessionRow(session: CourseSessionDto) -> impl IntoView {
    let type_label = if session.session_type == "online" { "آنلاین" } else { "حضوری" };
    let seats = match session.capacity {
        Some(capacity) => format!("{} / {}", session.enrolled_count, capacity),
        None => session.enrolled_count.to_string(),
    };
    let starts_at = session
        .starts_at
        .as_deref()
        .map(short_date)
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{session.title}</span>
                <span class="list-row__meta">{or_dash(session.course_title.as_deref())}</span>
            </div>
            <div class="list-row__side">
                <Badge variant="primary">{type_label}</Badge>
                <span class="list-row__meta">{seats}</span>
                <span class="list-row__date">{starts_at}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::general_list::filters::validate_declarations;

    #[test]
    fn test_filters_are_valid() {
        assert_eq!(validate_declarations(&session_filters()), Ok(()));
    }
}
