use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{or_dash, short_date};
use contracts::domain::a001_user::{UserDto, USER_ROLES};
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const USERS: Endpoint<UserDto> = Endpoint::new("/users");

pub fn user_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("role", "نقش", USER_ROLES),
        FilterDeclaration::checkbox("isActive", "فقط فعال"),
        FilterDeclaration::checkbox("isMobileVerified", "موبایل تأیید شده"),
    ]
}

fn role_label(role: &str) -> &'static str {
    match role {
        "admin" => "مدیر",
        "coach" => "مربی",
        _ => "کاربر",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    view! {
        <GeneralList
            query=USERS
            filters=user_filters()
            render_item=Callback::new(|user: UserDto| view! { <UserRow user=user /> }.into_any())
            title="کاربران"
            search_placeholder="جستجو در نام، موبایل یا ایمیل"
            show_date_filter=true
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn UserRow(user: UserDto) -> impl IntoView {
    let name = user.display_name();
    let status = if user.is_active { ("success", "فعال") } else { ("neutral", "غیرفعال") };

    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{name}</span>
                <span class="list-row__meta">{or_dash(user.mobile.as_deref())}</span>
                <span class="list-row__meta">{or_dash(user.email.as_deref())}</span>
            </div>
            <div class="list-row__side">
                <Badge variant="primary">{role_label(&user.role)}</Badge>
                <Badge variant=status.0>{status.1}</Badge>
                <span class="list-row__date">{short_date(&user.created_at)}</span>
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
        assert_eq!(validate_declarations(&user_filters()), Ok(()));
    }

    #[test]
    fn test_role_label() {
        assert_eq!(role_label("admin"), "مدیر");
        assert_eq!(role_label("unknown"), "کاربر");
    }
}
