//! The interactive console: a persisted members list and a recipients chooser.

use std::io::{self, BufRead, Write};

use devdom::render_text;
use devkit::config::KitConfig;
use devkit::storage::StorageService;
use devkit::widgets::{ListChooser, SelectableList, SelectionMode};
use serde::{Deserialize, Serialize};

use crate::commands::{self, Command, HELP};
use crate::demo::{self, Member};

const TOOL: &str = "console";
const GROUP_PREFERENCE: &str = "group";
pub const DEFAULT_GROUP: &str = "alpha";

/// Persisted between runs under the console's tool state key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConsoleState {
    chosen: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Members,
    Chooser,
}

/// Storage key remembering the selected member of a group.
pub fn members_key(group: &str) -> String {
    format!("members-list-last-selection-{group}")
}

pub struct Console {
    storage: StorageService,
    placeholder: String,
    mode: SelectionMode,
    group: String,
    members: SelectableList<Member>,
    chooser: ListChooser<Member, String>,
    view: View,
}

impl Console {
    /// Build the console, restoring the last group, member and recipients.
    ///
    /// `mode` is the selection mode of the members list.
    pub fn new(
        storage: StorageService,
        config: &KitConfig,
        group: Option<String>,
        mode: SelectionMode,
    ) -> Self {
        let group = group.unwrap_or_else(|| storage.preference(GROUP_PREFERENCE, DEFAULT_GROUP));
        storage.set_preference(GROUP_PREFERENCE, &group);

        let placeholder = config.empty_placeholder.clone();
        let members = members_list(&storage, &placeholder, &group, mode);
        let chooser = recipients_chooser(&storage);

        Self {
            storage,
            placeholder,
            mode,
            group,
            members,
            chooser,
            view: View::Members,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn members(&self) -> &SelectableList<Member> {
        &self.members
    }

    pub fn chooser(&self) -> &ListChooser<Member, String> {
        &self.chooser
    }

    /// Read commands until input ends or `quit`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.print_view(out)?;
        for line in input.lines() {
            let line = line?;
            match commands::parse(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if !self.execute(command, out)? {
                        break;
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        Ok(())
    }

    /// Run one command. Returns false once the console should exit.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<bool> {
        log::debug!("Executing {command:?}");
        match command {
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
            Command::Show => {}
            Command::Members => self.view = View::Members,
            Command::Chooser => self.view = View::Chooser,
            Command::Select(index) => match self.view {
                View::Members => {
                    self.members.handle_select(index);
                    self.remember_member();
                }
                View::Chooser => self.chooser.select_available(index),
            },
            Command::Unselect(index) => match self.view {
                View::Chooser => self.chooser.select_chosen(index),
                View::Members => writeln!(out, "unselect only applies to the chooser")?,
            },
            Command::Click(id) => {
                let hit = match self.view {
                    View::Members => {
                        let hit = self.members.handle_click(&id);
                        self.remember_member();
                        hit
                    }
                    View::Chooser => self.chooser.handle_click(&id),
                };
                if !hit {
                    writeln!(out, "no clickable element {id:?} in this view")?;
                }
            }
            Command::FocusUp | Command::FocusDown | Command::Activate
                if self.view == View::Chooser =>
            {
                writeln!(out, "keyboard focus only applies to the members list")?;
            }
            Command::FocusUp => self.members.focus_previous(),
            Command::FocusDown => self.members.focus_next(),
            Command::Activate => {
                self.members.select_focused();
                self.remember_member();
            }
            Command::Transfer(action) => {
                self.chooser.dispatch(action);
                self.view = View::Chooser;
            }
            Command::Group(group) => self.switch_group(group),
        }

        self.print_view(out)?;
        Ok(true)
    }

    fn remember_member(&self) {
        self.members
            .store_last_selected(&members_key(&self.group), demo::member_id);
    }

    fn switch_group(&mut self, group: String) {
        log::info!("Switching member group {} -> {group}", self.group);
        self.storage.set_preference(GROUP_PREFERENCE, &group);
        self.members = members_list(&self.storage, &self.placeholder, &group, self.mode);
        self.group = group;
        self.view = View::Members;
    }

    /// The current view as text.
    pub fn render(&self) -> String {
        match self.view {
            View::Members => format!(
                "[members: {}]\n{}",
                self.group,
                render_text(self.members.view())
            ),
            View::Chooser => format!("[recipients]\n{}", render_text(self.chooser.view())),
        }
    }

    fn print_view(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }
}

fn members_list(
    storage: &StorageService,
    placeholder: &str,
    group: &str,
    mode: SelectionMode,
) -> SelectableList<Member> {
    let mut list = SelectableList::new(demo::members_of(group), demo::render_member, mode)
    .id("members")
    .placeholder(placeholder)
    .with_storage(storage.clone())
    .on_selection_changed(|selected: &[Member]| {
        let ids: Vec<&str> = selected.iter().map(|m| m.id.as_str()).collect();
        log::info!("Members selected: {ids:?}");
    });

    list.restore_or_select_first(&members_key(group), demo::member_id);
    list
}

fn recipients_chooser(storage: &StorageService) -> ListChooser<Member, String> {
    let state: ConsoleState = storage.tool_state(TOOL, ConsoleState::default());
    let all = demo::members();
    let initial: Vec<Member> = state
        .chosen
        .iter()
        .filter_map(|id| all.iter().find(|m| &m.id == id).cloned())
        .collect();

    let sink = storage.clone();
    ListChooser::new(all, demo::render_member, demo::member_id)
        .id("recipients")
        .with_initial_chosen(initial)
        .on_chosen_changed(move |chosen: &[Member]| {
            let state = ConsoleState {
                chosen: chosen.iter().map(demo::member_id).collect(),
            };
            sink.set_tool_state(TOOL, &state);
        })
}
