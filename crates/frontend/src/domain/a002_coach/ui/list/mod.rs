use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{or_dash, short_date};
use contracts::domain::a002_coach::CoachDto;
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const COACHES: Endpoint<CoachDto> = Endpoint::new("/coaches");

pub fn coach_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::search("expertise", "تخصص"),
        FilterDeclaration::checkbox("isVerified", "تأیید شده"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CoachList() -> impl IntoView {
    view! {
        <GeneralList
            query=COACHES
            filters=coach_filters()
            render_item=Callback::new(|coach: CoachDto| view! { <CoachRow coach=coach /> }.into_any())
            title="مربیان"
            search_placeholder="جستجو در نام مربی"
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn CoachRow(coach: CoachDto) -> impl IntoView {
    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{coach.full_name}</span>
                <span class="list-row__meta">{or_dash(coach.expertise.as_deref())}</span>
                <span class="list-row__meta">{or_dash(coach.mobile.as_deref())}</span>
            </div>
            <div class="list-row__side">
                {coach.is_verified.then(|| view! { <Badge variant="success">"تأیید شده"</Badge> })}
                <span class="list-row__meta">{format!("{} دوره", coach.courses_count)}</span>
                <span class="list-row__date">{short_date(&coach.created_at)}</span>
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
        assert_eq!(validate_declarations(&coach_filters()), Ok(()));
    }
}
