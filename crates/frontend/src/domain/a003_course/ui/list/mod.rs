use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{format_amount, or_dash, short_date};
use contracts::domain::a003_course::{CourseDto, COURSE_STATUSES};
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const COURSES: Endpoint<CourseDto> = Endpoint::new("/courses");

pub fn course_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("status", "وضعیت", COURSE_STATUSES),
        FilterDeclaration::checkbox("isFree", "رایگان"),
        FilterDeclaration::search("coachName", "نام مربی"),
    ]
}

/// Вариант бейджа и подпись для статуса курса
fn status_badge(status: &str) -> (&'static str, &'static str) {
    match status {
        "published" => ("success", "منتشر شده"),
        "archived" => ("neutral", "بایگانی"),
        _ => ("warning", "پیش‌نویس"),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CourseList() -> impl IntoView {
    view! {
        <GeneralList
            query=COURSES
            filters=course_filters()
            render_item=Callback::new(|course: CourseDto| view! { <CourseRow course=course /> }.into_any())
            title="دوره‌ها"
            search_placeholder="جستجو در عنوان دوره"
            show_date_filter=true
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn CourseRow(course: CourseDto) -> impl IntoView {
    let (variant, label) = status_badge(&course.status);
    let price = if course.is_free {
        "رایگان".to_string()
    } else {
        format_amount(course.price)
    };

    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{course.title}</span>
                <span class="list-row__meta">{or_dash(course.coach_name.as_deref())}</span>
            </div>
            <div class="list-row__side">
                <Badge variant=variant>{label}</Badge>
                <span class="list-row__meta">{price}</span>
                <span class="list-row__meta">{format!("{} جلسه", course.sessions_count)}</span>
                <span class="list-row__date">{short_date(&course.created_at)}</span>
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
        assert_eq!(validate_declarations(&course_filters()), Ok(()));
    }

    #[test]
    fn test_every_status_has_badge() {
        for status in COURSE_STATUSES {
            let (_, label) = status_badge(status);
            assert!(!label.is_empty());
        }
        assert_eq!(status_badge("published").0, "success");
    }
}
