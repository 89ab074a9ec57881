use egui::Button;
use egui_extras::{Column, TableBuilder};
use tasklist_client_core::Client;
use tasklist_shared::{
    req_args::api::task_list::NewTaskListReqArgs,
    responses::ApiMessage,
    task::{TaskListSummary, TaskTitle},
};

use super::{
    data_state::{AwaitingType, DataState, SaveOutcome},
    DisplayablePage,
};
use crate::{app::wake_fn, displayable_page_common, ui_helpers::get_text_height};

/// Overview of every task list the user owns or has been given access to
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiTaskLists {
    is_open: bool,
    page_unique_number: usize,
    #[serde(skip)]
    should_refresh: bool,
    #[serde(skip)]
    seen_version: u64,
    #[serde(skip)]
    data_state: DataState<Vec<TaskListSummary>>,
    #[serde(skip)]
    new_title: String,
    #[serde(skip)]
    create_state: DataState<ApiMessage>,
}

impl DisplayablePage for UiTaskLists {
    displayable_page_common!("Task Lists");

    fn reset_to_default(&mut self, _: super::private::Token) {
        self.should_refresh = Default::default();
        self.seen_version = Default::default();
        self.data_state = Default::default();
        self.new_title = Default::default();
        self.create_state = Default::default();
    }

    fn show(&mut self, ui: &mut eframe::egui::Ui, data_shared: &mut crate::DataShared) {
        let version = data_shared.task_lists_version();
        if self.seen_version != version {
            self.seen_version = version;
            self.should_refresh = true;
        }

        match self.create_state.poll_save() {
            None | Some(SaveOutcome::Ongoing) => {}
            Some(SaveOutcome::Completed(msg)) => {
                data_shared.notifications.success(msg.message);
                self.new_title.clear();
                data_shared.mark_task_lists_outdated();
            }
            Some(SaveOutcome::Failed(e)) => data_shared.notifications.error(e),
        }

        if self.should_refresh {
            self.should_refresh = false;
            self.data_state = Default::default();
        }

        if let DataState::Present(data) = &self.data_state {
            ui.horizontal_wrapped(|ui| {
                if ui.button("Refresh").clicked() {
                    self.should_refresh = true;
                }
            });
            ui.separator();
            ui_new_task_list_form(
                ui,
                &data_shared.client,
                &mut self.new_title,
                &mut self.create_state,
            );
            ui.separator();
            if let Some(clicked) = ui_show_task_lists(ui, data) {
                data_shared.request_task_list_page(clicked);
            }
        } else {
            let ctx = ui.ctx().clone();
            self.data_state.get(Some(ui), None, || {
                AwaitingType(data_shared.client.get_task_lists(wake_fn(ctx)))
            });
        }
    }
}

fn ui_new_task_list_form(
    ui: &mut egui::Ui,
    client: &Client,
    new_title: &mut String,
    create_state: &mut DataState<ApiMessage>,
) {
    ui.horizontal(|ui| {
        ui.label("New task list");
        let response = ui.text_edit_singleline(new_title);

        let title = TaskTitle::try_from(new_title.as_str());
        if let Err(e) = &title {
            if !new_title.is_empty() {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            }
        }

        let is_ready = title.is_ok() && create_state.is_none();
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add_enabled(is_ready, Button::new("Create")).clicked() || (submitted && is_ready) {
            if let Ok(title) = title {
                let ctx = ui.ctx().clone();
                *create_state = DataState::AwaitingResponse(AwaitingType(
                    client.create_task_list(&NewTaskListReqArgs { title }, wake_fn(ctx)),
                ));
            }
        }
        if !create_state.is_none() {
            ui.spinner();
        }
    });
}

fn ui_show_task_lists(ui: &mut egui::Ui, data: &[TaskListSummary]) -> Option<TaskListSummary> {
    if data.is_empty() {
        ui.label("No task lists yet. Create one above.");
        return None;
    }
    let mut clicked = None;
    let text_height = get_text_height(ui);
    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::LEFT))
        .column(Column::auto())
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .sense(egui::Sense::click())
        .header(text_height, |mut header| {
            header.col(|ui| {
                ui.strong("Title");
            });
            header.col(|ui| {
                ui.strong("Access");
            });
        });

    table.body(|body| {
        body.rows(text_height, data.len(), |mut row| {
            let task_list = &data[row.index()];
            row.col(|ui| {
                ui.label(&task_list.title);
            });
            row.col(|ui| {
                ui.label(if task_list.is_own {
                    "Own"
                } else {
                    "Shared with you"
                });
            });

            // Check for click of a row
            if row.response().clicked() {
                clicked = Some(task_list.clone());
            }
        });
    });
    clicked
}
