//! Sample data for the console.

use devdom::Element;

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: String,
    pub nick_name: String,
    pub location: String,
    pub group: String,
}

impl Member {
    fn new(id: &str, nick_name: &str, location: &str, group: &str) -> Self {
        Self {
            id: id.into(),
            nick_name: nick_name.into(),
            location: location.into(),
            group: group.into(),
        }
    }
}

pub fn members() -> Vec<Member> {
    vec![
        Member::new("m-101", "ada", "Lisbon", "alpha"),
        Member::new("m-102", "brian", "Leeds", "alpha"),
        Member::new("m-103", "chen", "Taipei", "alpha"),
        Member::new("m-104", "dana", "Austin", "alpha"),
        Member::new("m-201", "emeka", "Lagos", "beta"),
        Member::new("m-202", "farah", "Amman", "beta"),
        Member::new("m-203", "gus", "Oslo", "beta"),
    ]
}

pub fn members_of(group: &str) -> Vec<Member> {
    members().into_iter().filter(|m| m.group == group).collect()
}

pub fn member_id(member: &Member) -> String {
    member.id.clone()
}

pub fn render_member(member: &Member) -> Element {
    Element::row()
        .gap(1)
        .child(Element::text(member.nick_name.clone()))
        .child(Element::text(format!("({})", member.location)))
}
