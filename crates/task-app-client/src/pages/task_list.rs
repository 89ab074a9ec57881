use egui::{Button, RichText};
use tasklist_shared::{
    id::{TaskListId, TodoId},
    internal_error,
    req_args::api::{
        task_list::UpdateTaskListReqArgs,
        todo::{NewTodoReqArgs, UpdateTodoReqArgs},
    },
    responses::ApiMessage,
    task::{TaskListDetail, TaskListSummary, TaskTitle, Todo, TodoDescription, TodoStatus},
};

use super::{
    data_state::{AwaitingType, DataState, SaveOutcome},
    DisplayablePage,
};
use crate::{app::wake_fn, displayable_page_common, ui_helpers::ui_escape_button};

mod share_modal;

use share_modal::ShareModal;

/// A single task list with its todos, plus the owner-only share dialog
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiTaskList {
    is_open: bool,
    page_unique_number: usize,
    /// Which list this page shows; persisted so the page survives restarts
    summary: Option<TaskListSummary>,
    #[serde(skip)]
    should_refresh: bool,
    #[serde(skip)]
    data_state: DataState<TaskListDetail>,
    #[serde(skip)]
    header_op: HeaderOp,
    #[serde(skip)]
    todo_edit: Option<TodoEdit>,
    #[serde(skip)]
    new_todo: String,
    /// One mutation in flight at a time, the page is read only while it runs
    #[serde(skip)]
    save_state: DataState<ApiMessage>,
    #[serde(skip)]
    on_saved: OnSaved,
    #[serde(skip)]
    share_modal: Option<ShareModal>,
}

#[derive(Debug, Default)]
enum HeaderOp {
    #[default]
    View,
    Rename(String),
    ConfirmDelete,
}

#[derive(Debug)]
struct TodoEdit {
    id: TodoId,
    text: String,
}

/// What to do once the in-flight save completes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum OnSaved {
    /// Refetch just this page
    #[default]
    Refresh,
    /// Refetch this page and the overview (the title changed)
    RefreshAll,
    /// The list is gone, close the page and flag the overview
    Close,
}

/// A mutation requested by the UI this frame
#[derive(Debug)]
enum PageAction {
    OpenShare,
    Rename(TaskTitle),
    Delete,
    ToggleTodo(Todo),
    SaveTodoDescription {
        id: TodoId,
        description: TodoDescription,
        status: TodoStatus,
    },
    DeleteTodo(TodoId),
    CreateTodo(TodoDescription),
}

impl UiTaskList {
    pub fn new_for(summary: TaskListSummary, page_unique_number: usize) -> Self {
        Self {
            summary: Some(summary),
            ..Self::new_page(page_unique_number)
        }
    }

    pub fn is_for(&self, id: &TaskListId) -> bool {
        self.summary
            .as_ref()
            .is_some_and(|summary| &summary.id == id)
    }

    fn apply(
        &mut self,
        action: PageAction,
        data_shared: &mut crate::DataShared,
        ctx: egui::Context,
    ) {
        let Some(list_id) = self.summary.as_ref().map(|summary| summary.id.clone()) else {
            data_shared
                .notifications
                .error(internal_error!("no task list bound to this page"));
            return;
        };
        let client = &data_shared.client;
        self.on_saved = match &action {
            PageAction::Rename(_) => OnSaved::RefreshAll,
            PageAction::Delete => OnSaved::Close,
            _ => OnSaved::Refresh,
        };
        let rx = match action {
            PageAction::OpenShare => {
                self.share_modal = Some(ShareModal::default());
                return;
            }
            PageAction::Rename(title) => {
                client.update_task_list(&list_id, &UpdateTaskListReqArgs { title }, wake_fn(ctx))
            }
            PageAction::Delete => client.delete_task_list(&list_id, wake_fn(ctx)),
            PageAction::ToggleTodo(todo) => client.update_todo(
                &list_id,
                &todo.id,
                &UpdateTodoReqArgs {
                    description: todo.description,
                    status: todo.status.toggled(),
                },
                wake_fn(ctx),
            ),
            PageAction::SaveTodoDescription {
                id,
                description,
                status,
            } => client.update_todo(
                &list_id,
                &id,
                &UpdateTodoReqArgs {
                    description,
                    status,
                },
                wake_fn(ctx),
            ),
            PageAction::DeleteTodo(id) => client.delete_todo(&list_id, &id, wake_fn(ctx)),
            PageAction::CreateTodo(description) => {
                client.create_todo(&list_id, &NewTodoReqArgs { description }, wake_fn(ctx))
            }
        };
        self.save_state = DataState::AwaitingResponse(AwaitingType(rx));
    }
}

impl DisplayablePage for UiTaskList {
    displayable_page_common!("Task List");

    fn reset_to_default(&mut self, _: super::private::Token) {
        self.should_refresh = Default::default();
        self.data_state = Default::default();
        self.header_op = Default::default();
        self.todo_edit = Default::default();
        self.new_todo = Default::default();
        self.save_state = Default::default();
        self.on_saved = Default::default();
        self.share_modal = Default::default();
    }

    fn title(&self) -> String {
        let base = match self.summary.as_ref() {
            Some(summary) => format!("{}: {}", Self::title_base(), summary.title),
            None => Self::title_base().to_string(),
        };
        if self.page_unique_number == 0 {
            base
        } else {
            format!("{base} ({})", self.page_unique_number)
        }
    }

    fn adjust_window_settings<'open>(&self, window: egui::Window<'open>) -> egui::Window<'open> {
        // Titles repeat when lists share a name, the number keeps the id stable
        window.id(egui::Id::new(("task list page", self.page_unique_number)))
    }

    fn show(&mut self, ui: &mut eframe::egui::Ui, data_shared: &mut crate::DataShared) {
        let Some(summary) = self.summary.clone() else {
            ui.label("No task list selected. Open one from the Task Lists page.");
            return;
        };
        let ctx = ui.ctx().clone();

        match self.save_state.poll_save() {
            None | Some(SaveOutcome::Ongoing) => {}
            Some(SaveOutcome::Completed(msg)) => {
                data_shared.notifications.success(msg.message);
                match self.on_saved {
                    OnSaved::Refresh => self.should_refresh = true,
                    OnSaved::RefreshAll => {
                        data_shared.mark_task_lists_outdated();
                        self.should_refresh = true;
                    }
                    OnSaved::Close => {
                        data_shared.mark_task_lists_outdated();
                        self.close_page();
                        return;
                    }
                }
            }
            Some(SaveOutcome::Failed(e)) => data_shared.notifications.error(e),
        }

        if self.should_refresh {
            self.should_refresh = false;
            self.data_state = Default::default();
        }

        let mut action = None;
        if let DataState::Present(detail) = &self.data_state {
            // The window title tracks renames done on this page
            if summary.title != detail.title || summary.is_own != detail.is_own {
                self.summary = Some(TaskListSummary {
                    id: detail.id.clone(),
                    title: detail.title.clone(),
                    is_own: detail.is_own,
                });
            }

            let is_saving = !self.save_state.is_none();
            if is_saving {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Saving...");
                });
            }
            ui.add_enabled_ui(!is_saving, |ui| {
                action = ui_show_header(ui, detail, &mut self.header_op, &mut self.should_refresh);
                ui.separator();
                action = action.or(ui_show_todos(ui, detail, &mut self.todo_edit));
                ui.separator();
                action = action.or(ui_new_todo_form(ui, &mut self.new_todo));
            });
        } else {
            let fetch_ctx = ctx.clone();
            let id = summary.id.clone();
            self.data_state.get(Some(ui), None, || {
                AwaitingType(data_shared.client.get_task_list(&id, wake_fn(fetch_ctx)))
            });
        }

        if let Some(action) = action {
            self.apply(action, data_shared, ctx.clone());
        }

        if let Some(mut modal) = self.share_modal.take() {
            if modal.show(&ctx, data_shared, &summary.id, summary.title.as_ref()) {
                self.share_modal = Some(modal);
            }
        }
    }
}

fn ui_show_header(
    ui: &mut egui::Ui,
    detail: &TaskListDetail,
    header_op: &mut HeaderOp,
    should_refresh: &mut bool,
) -> Option<PageAction> {
    let mut action = None;
    let mut next_op = None;
    match header_op {
        HeaderOp::View => {
            ui.horizontal_wrapped(|ui| {
                ui.heading(detail.title.as_ref());
                if ui.button("Refresh").clicked() {
                    *should_refresh = true;
                }
                if detail.is_own {
                    if ui.button("Rename").clicked() {
                        next_op = Some(HeaderOp::Rename(detail.title.to_string()));
                    }
                    if ui.button("Share").clicked() {
                        action = Some(PageAction::OpenShare);
                    }
                    if ui.button("Delete").clicked() {
                        next_op = Some(HeaderOp::ConfirmDelete);
                    }
                }
            });
        }
        HeaderOp::Rename(new_title) => {
            ui.horizontal_wrapped(|ui| {
                ui.label("Title");
                let response = ui.text_edit_singleline(new_title);
                let title = TaskTitle::try_from(new_title.as_str());
                if let Err(e) = &title {
                    ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                }
                let is_ready = title.is_ok();
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.add_enabled(is_ready, Button::new("Save")).clicked()
                    || (submitted && is_ready)
                {
                    if let Ok(title) = title {
                        action = Some(PageAction::Rename(title));
                        next_op = Some(HeaderOp::View);
                    }
                }
                if ui_escape_button(ui, "Cancel") {
                    next_op = Some(HeaderOp::View);
                }
            });
        }
        HeaderOp::ConfirmDelete => {
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("Delete \"{}\" and all its todos?", detail.title));
                if ui.button("Confirm Delete").clicked() {
                    action = Some(PageAction::Delete);
                    next_op = Some(HeaderOp::View);
                }
                if ui_escape_button(ui, "Cancel") {
                    next_op = Some(HeaderOp::View);
                }
            });
        }
    }
    if let Some(op) = next_op {
        *header_op = op;
    }
    action
}

fn ui_show_todos(
    ui: &mut egui::Ui,
    detail: &TaskListDetail,
    todo_edit: &mut Option<TodoEdit>,
) -> Option<PageAction> {
    if detail.todos.is_empty() {
        ui.label("No todos yet. Add one below.");
        return None;
    }
    let mut action = None;
    let mut next_edit = None;
    for todo in &detail.todos {
        ui.horizontal(|ui| {
            let mut is_completed = todo.status.is_completed();
            if ui.checkbox(&mut is_completed, "").changed() {
                action = Some(PageAction::ToggleTodo(todo.clone()));
            }
            match todo_edit.as_mut() {
                Some(edit) if edit.id == todo.id => {
                    let response = ui.text_edit_singleline(&mut edit.text);
                    let description = TodoDescription::try_from(edit.text.as_str());
                    if let Err(e) = &description {
                        ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                    }
                    let is_ready = description.is_ok();
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.add_enabled(is_ready, Button::new("Save")).clicked()
                        || (submitted && is_ready)
                    {
                        if let Ok(description) = description {
                            action = Some(PageAction::SaveTodoDescription {
                                id: todo.id.clone(),
                                description,
                                status: todo.status,
                            });
                            next_edit = Some(None);
                        }
                    }
                    if ui_escape_button(ui, "Cancel") {
                        next_edit = Some(None);
                    }
                }
                _ => {
                    if todo.status.is_completed() {
                        ui.label(RichText::new(todo.description.as_ref()).strikethrough());
                    } else {
                        ui.label(&todo.description);
                    }
                    if ui.button("Edit").clicked() {
                        next_edit = Some(Some(TodoEdit {
                            id: todo.id.clone(),
                            text: todo.description.to_string(),
                        }));
                    }
                    if ui.button("Delete").clicked() {
                        action = Some(PageAction::DeleteTodo(todo.id.clone()));
                    }
                }
            }
        });
    }
    if let Some(edit) = next_edit {
        *todo_edit = edit;
    }
    action
}

fn ui_new_todo_form(ui: &mut egui::Ui, new_todo: &mut String) -> Option<PageAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.label("New todo");
        let response = ui.text_edit_singleline(new_todo);
        let description = TodoDescription::try_from(new_todo.as_str());
        if let Err(e) = &description {
            if !new_todo.is_empty() {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            }
        }
        let is_ready = description.is_ok();
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add_enabled(is_ready, Button::new("Add")).clicked() || (submitted && is_ready) {
            if let Ok(description) = description {
                action = Some(PageAction::CreateTodo(description));
                new_todo.clear();
            }
        }
    });
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn summary(title: &str) -> TaskListSummary {
        TaskListSummary {
            id: TaskListId::from("list-1"),
            title: TaskTitle::try_from(title).unwrap(),
            is_own: true,
        }
    }

    #[rstest]
    #[case::first_page(0, "Task List: Groceries")]
    #[case::duplicate_title(1, "Task List: Groceries (1)")]
    fn page_title_carries_the_list_name(#[case] page_unique_number: usize, #[case] expected: &str) {
        // Act
        let page = UiTaskList::new_for(summary("Groceries"), page_unique_number);

        // Assert
        assert_eq!(page.title(), expected);
    }

    #[test]
    fn page_matches_only_its_own_list() {
        let page = UiTaskList::new_for(summary("Groceries"), 0);
        assert!(page.is_for(&TaskListId::from("list-1")));
        assert!(!page.is_for(&TaskListId::from("list-2")));
    }
}
