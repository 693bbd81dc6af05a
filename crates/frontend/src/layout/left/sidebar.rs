//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (page key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "people",
            label: "کاربران و مربیان",
            icon: "users",
            items: vec![("a001_user", "users"), ("a002_coach", "user")],
        },
        MenuGroup {
            id: "education",
            label: "آموزش",
            icon: "book",
            items: vec![("a003_course", "book"), ("a004_course_session", "calendar")],
        },
        MenuGroup {
            id: "sales",
            label: "فروش",
            icon: "cash",
            items: vec![
                ("a006_order", "shopping-cart"),
                ("a007_transaction", "credit-card"),
                ("a005_coupon", "tag"),
            ],
        },
        MenuGroup {
            id: "support",
            label: "پشتیبانی",
            icon: "message-square",
            items: vec![("a008_ticket", "message-square"), ("a009_notification", "bell")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Все группы раскрыты: меню короткое
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content" dir="rtl">
            {get_menu_groups().into_iter().map(|group| {
                let gid_click = group.id.to_string();
                let gid_exp = group.id.to_string();
                let gid_show = group.id.to_string();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-right="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-left")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-right="10px"
                                            on:click=move |_| ctx.open_page(key)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{page_label_for_key(key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_label() {
        let keys: Vec<&str> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(key, _)| key))
            .collect();
        assert_eq!(keys.len(), 9);
        for key in keys {
            assert_ne!(page_label_for_key(key), key);
        }
    }
}
