use egui::Button;
use strum::IntoEnumIterator as _;
use tasklist_client_core::share_select::{SearchValidity, ShareSelect};
use tasklist_shared::{
    id::{TaskListId, UserId},
    req_args::api::task_list::{ShareReqArgs, UnshareReqArgs, UpdatePermissionReqArgs},
    responses::ApiMessage,
    share::{SharePermission, SharedWith},
};
use tasklist_time::Timestamp;

use crate::{
    app::wake_fn,
    pages::{AwaitingType, DataState, SaveOutcome},
    ui_helpers::success_color,
};

/// Owner-only dialog for granting and revoking access to a task list
#[derive(Debug, Default)]
pub struct ShareModal {
    select: ShareSelect,
    shared_with: DataState<Vec<SharedWith>>,
    save_state: DataState<ApiMessage>,
    /// Set while the in-flight save is a grant, so success clears the chips
    clear_selection_on_success: bool,
}

/// A request the dialog wants to send this frame
#[derive(Debug)]
enum ShareAction {
    Share(ShareReqArgs),
    Unshare(UserId),
    SetPermission {
        user_id: UserId,
        permission: SharePermission,
    },
}

impl ShareModal {
    /// Returns false once the dialog has been closed
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        data_shared: &mut crate::DataShared,
        list_id: &TaskListId,
        list_title: &str,
    ) -> bool {
        let mut is_open = true;
        egui::Window::new(format!("Share: {list_title}"))
            .id(egui::Id::new(("share dialog", list_id)))
            .collapsible(false)
            .open(&mut is_open)
            .show(ctx, |ui| {
                self.ui_contents(ui, data_shared, list_id);
            });
        is_open
    }

    fn ui_contents(
        &mut self,
        ui: &mut egui::Ui,
        data_shared: &mut crate::DataShared,
        list_id: &TaskListId,
    ) {
        match self.save_state.poll_save() {
            None | Some(SaveOutcome::Ongoing) => {}
            Some(SaveOutcome::Completed(msg)) => {
                data_shared.notifications.success(msg.message);
                if std::mem::take(&mut self.clear_selection_on_success) {
                    // That selection was granted, the next share starts clean
                    self.select.replace_selection(Vec::new());
                }
                self.shared_with = Default::default();
            }
            Some(SaveOutcome::Failed(e)) => {
                data_shared.notifications.error(e);
                self.clear_selection_on_success = false;
            }
        }

        let now = Timestamp::now();
        self.select
            .process(now, &data_shared.client, wake_fn(ui.ctx().clone()));

        let is_saving = !self.save_state.is_none();
        let mut action = None;
        ui.add_enabled_ui(!is_saving, |ui| {
            action = ui_search_and_selection(ui, &mut self.select, now);
            ui.separator();
            action = action.or(self.ui_shared_with(ui, data_shared, list_id));
        });
        if is_saving {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Saving...");
            });
        }

        if let Some(action) = action {
            self.apply(action, data_shared, list_id, ui.ctx().clone());
        }
    }

    fn ui_shared_with(
        &mut self,
        ui: &mut egui::Ui,
        data_shared: &mut crate::DataShared,
        list_id: &TaskListId,
    ) -> Option<ShareAction> {
        ui.heading("Currently shared with");
        if let DataState::Present(rows) = &self.shared_with {
            return ui_shared_with_rows(ui, rows);
        }
        let ctx = ui.ctx().clone();
        let id = list_id.clone();
        self.shared_with.get(Some(ui), None, || {
            AwaitingType(data_shared.client.get_shared_with(&id, wake_fn(ctx)))
        });
        None
    }

    fn apply(
        &mut self,
        action: ShareAction,
        data_shared: &mut crate::DataShared,
        list_id: &TaskListId,
        ctx: egui::Context,
    ) {
        let client = &data_shared.client;
        let rx = match action {
            ShareAction::Share(args) => {
                self.clear_selection_on_success = true;
                client.share_task_list(list_id, &args, wake_fn(ctx))
            }
            ShareAction::Unshare(user_id) => client.unshare_task_list(
                list_id,
                &UnshareReqArgs {
                    users: vec![user_id],
                },
                wake_fn(ctx),
            ),
            ShareAction::SetPermission {
                user_id,
                permission,
            } => client.update_permission(
                list_id,
                &UpdatePermissionReqArgs {
                    user_id,
                    permission,
                },
                wake_fn(ctx),
            ),
        };
        self.save_state = DataState::AwaitingResponse(AwaitingType(rx));
    }
}

fn ui_search_and_selection(
    ui: &mut egui::Ui,
    select: &mut ShareSelect,
    now: Timestamp,
) -> Option<ShareAction> {
    let mut action = None;

    // The border color reports what the lookups said about the current text
    let stroke_color = match select.validity() {
        SearchValidity::Unknown => None,
        SearchValidity::Valid => Some(success_color(ui.visuals())),
        SearchValidity::Invalid => Some(ui.visuals().error_fg_color),
    };
    let mut text = select.input().to_owned();
    let response = ui
        .scope(|ui| {
            if let Some(color) = stroke_color {
                let stroke = egui::Stroke::new(1.0, color);
                ui.visuals_mut().widgets.inactive.bg_stroke = stroke;
                ui.visuals_mut().widgets.hovered.bg_stroke = stroke;
                ui.visuals_mut().widgets.active.bg_stroke = stroke;
            }
            ui.add(egui::TextEdit::singleline(&mut text).hint_text("Type a username and press Enter"))
        })
        .inner;
    if response.changed() {
        select.set_input(text, now);
    }
    if response.lost_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter))
        && select.enter_pressed()
    {
        // Selected, keep the focus so the next name can be typed right away
        response.request_focus();
    }

    // Keep frames coming while a lookup deadline is pending
    if let Some(time_left) = select.time_to_deadline(now) {
        ui.ctx().request_repaint_after(time_left.into());
    }

    // One removable chip per selected user
    if !select.selected().is_empty() {
        let mut removed = None;
        ui.horizontal_wrapped(|ui| {
            for (i, candidate) in select.selected().iter().enumerate() {
                if ui.small_button("x").clicked() {
                    removed = Some(i);
                }
                ui.label(&candidate.label);
            }
        });
        if let Some(i) = removed {
            let mut remaining = select.selected().to_vec();
            remaining.remove(i);
            select.replace_selection(remaining);
        }
    }

    ui.horizontal(|ui| {
        let mut permission = select.permission();
        egui::ComboBox::from_label("Permission")
            .selected_text(permission.to_string())
            .show_ui(ui, |ui| {
                for option in SharePermission::iter() {
                    ui.selectable_value(&mut permission, option, option.to_string());
                }
            });
        if permission != select.permission() {
            select.set_permission(permission);
        }

        if ui
            .add_enabled(select.is_submit_enabled(), Button::new("Share"))
            .clicked()
        {
            if let Some(args) = select.submission() {
                action = Some(ShareAction::Share(args));
            }
        }
    });

    action
}

fn ui_shared_with_rows(ui: &mut egui::Ui, rows: &[SharedWith]) -> Option<ShareAction> {
    if rows.is_empty() {
        ui.label("Not shared with anyone yet");
        return None;
    }
    let mut action = None;
    egui::Grid::new("shared with grid")
        .num_columns(4)
        .striped(true)
        .show(ui, |ui| {
            for row in rows {
                ui.label(&row.user.username);
                let mut permission = row.permission;
                egui::ComboBox::from_id_salt(("permission", &row.id))
                    .selected_text(permission.to_string())
                    .show_ui(ui, |ui| {
                        for option in SharePermission::iter() {
                            ui.selectable_value(&mut permission, option, option.to_string());
                        }
                    });
                if permission != row.permission {
                    action = Some(ShareAction::SetPermission {
                        user_id: row.user.id.clone(),
                        permission,
                    });
                }
                if ui.button("Unshare").clicked() {
                    action = Some(ShareAction::Unshare(row.user.id.clone()));
                }
                ui.label(format!(
                    "since {}",
                    row.created_at.display_as_locale_datetime()
                ));
                ui.end_row();
            }
        });
    action
}
