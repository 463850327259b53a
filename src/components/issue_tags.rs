use crate::config::Config;
use crate::models::sales::IssueBadges;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IssueTagsProps {
    pub issues: Vec<String>,
}

#[function_component(IssueTags)]
pub fn issue_tags(props: &IssueTagsProps) -> Html {
    let badges = IssueBadges::split(&props.issues, Config::MAX_INLINE_ISSUES);

    if badges.shown.is_empty() {
        return Html::default();
    }

    html! {
        <div class="issue-tags">
            { for badges.keyed().map(|(key, issue)| html! {
                <span class="tag tag-issue" key={key}>{issue}</span>
            }) }
            if badges.overflow > 0 {
                <span class="tag tag-overflow">{format!("+{}", badges.overflow)}</span>
            }
        </div>
    }
}
