use egui::ScrollArea;
use tasklist_client_core::UiCallBack;
use tasklist_shared::task::TaskListSummary;
use tasklist_time::Timestamp;
use tracing::{info, warn};

use crate::notifications::Notifications;
use crate::pages::{task_list::UiTaskList, task_lists::UiTaskLists, UiPage};
use crate::shortcuts::Shortcuts;
use crate::DisplayablePage;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct TaskApp {
    data_shared: DataShared,
    active_pages: Vec<UiPage>,
    shortcuts: Shortcuts,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DataShared {
    #[serde(skip)]
    pub client: tasklist_client_core::Client,
    #[serde(skip)]
    pub notifications: Notifications,
    /// Detail pages requested by other pages, drained by the app each frame
    #[serde(skip)]
    task_lists_to_open: Vec<TaskListSummary>,
    /// Bumped on every mutation so overview pages know to refetch
    #[serde(skip)]
    task_lists_version: u64,
}

impl DataShared {
    /// Queues a detail page for the given list (pages cannot reach the page
    /// collection themselves)
    pub fn request_task_list_page(&mut self, summary: TaskListSummary) {
        self.task_lists_to_open.push(summary);
    }

    /// Flags the overview to refetch because a mutation elsewhere changed what
    /// it shows
    pub fn mark_task_lists_outdated(&mut self) {
        self.task_lists_version = self.task_lists_version.wrapping_add(1);
    }

    pub(crate) fn task_lists_version(&self) -> u64 {
        self.task_lists_version
    }
}

impl eframe::App for TaskApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        info!("Saving with key: {}", eframe::APP_KEY);
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per
    /// second. Put your widgets into a `SidePanel`, `TopPanel`,
    /// `CentralPanel`, `Window` or `Area`.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.open_requested_task_lists();
        self.top_panel(ctx);
        self.bottom_panel(ctx);
        self.show_pages(ctx);
        self.data_shared.notifications.show(ctx);

        // Request repaint after 1 second
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }
}

impl TaskApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, server_address: String) -> Self {
        // This is also where you can customize the look and feel of egui using
        // `cc.egui_ctx.set_visuals` and `cc.egui_ctx.set_fonts`.

        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut app: Self = if let Some(storage) = cc.storage {
            info!("Storage found. Loading...");
            match eframe::get_value(storage, eframe::APP_KEY) {
                Some(value) => {
                    info!("Loaded succeeded");
                    value
                }
                None => {
                    warn!("Load failed");
                    Default::default()
                }
            }
        } else {
            info!("No storage found");
            Default::default()
        };
        app.data_shared.client = tasklist_client_core::Client::new(server_address);
        app
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Extend);
        #[cfg(not(target_arch = "wasm32"))]
        self.ui_menu_file(ui, ctx);
        self.ui_menu_pages(ui);
    }

    fn ui_menu_pages(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Pages", |ui| {
            self.ui_menu_page_btn::<UiTaskLists>(ui);

            ui.separator();
            if ui.button("Open All Pages").clicked() {
                self.open_all_pages();
                ui.close_menu();
            }
            if ui.button("Close All Pages").clicked() {
                self.close_all_pages();
                ui.close_menu();
            }
            if ui.button("Deactivate All Pages").clicked() {
                self.deactivate_all_pages();
                ui.close_menu();
            }
            if ui.button("Sort Pages By Name").clicked() {
                self.sort_pages_by_name();
                ui.close_menu();
            }
            if ui
                .add(
                    egui::Button::new("Organize Pages")
                        .shortcut_text(ui.ctx().format_shortcut(&self.shortcuts.organize_pages)),
                )
                .clicked()
            {
                do_organize_pages(ui);
                ui.close_menu();
            }
        });
    }

    fn top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();
                self.menu(ui, ctx);
            });
        });
    }

    fn bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::BOTTOM), |ui| {
                ui.label(self.current_time());
                egui::warn_if_debug_build(ui);
            });
        });
    }

    fn show_pages(&mut self, ctx: &egui::Context) {
        self.ui_active_pages_panel(ctx);
        for page in self.active_pages.iter_mut() {
            page.display_page(ctx, &mut self.data_shared);
        }
    }

    fn current_time(&self) -> String {
        Timestamp::now().display_as_locale_datetime()
    }

    fn open_requested_task_lists(&mut self) {
        for summary in std::mem::take(&mut self.data_shared.task_lists_to_open) {
            self.open_task_list_page(summary);
        }
    }

    /// Focuses the existing page for the list if there is one, otherwise
    /// activates a new page
    fn open_task_list_page(&mut self, summary: TaskListSummary) {
        for page in self.active_pages.iter_mut() {
            if let UiPage::TaskList(task_list_page) = page {
                if task_list_page.is_for(&summary.id) {
                    task_list_page.open_page();
                    return;
                }
            }
        }
        let page_unique_number = self.next_page_unique_number(UiTaskList::title_base());
        self.active_pages.push(UiPage::TaskList(
            UiTaskList::new_for(summary, page_unique_number).and_open_page(),
        ));
    }

    fn next_page_unique_number(&self, base_title: &str) -> usize {
        let mut max_id_found = None;
        for page in self.active_pages.iter() {
            if page.title_base() == base_title {
                max_id_found = max_id_found.max(Some(page.page_unique_number()))
            }
        }
        if let Some(val) = max_id_found {
            val + 1
        } else {
            0
        }
    }

    fn ui_menu_page_btn<T: DisplayablePage>(&mut self, ui: &mut egui::Ui) {
        let base_title = T::title_base();
        if ui.button(base_title).clicked() {
            let page_unique_number = self.next_page_unique_number(base_title);
            self.active_pages
                .push(UiPage::new_page_with_unique_number::<T>(page_unique_number));
            ui.close_menu();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn ui_menu_file(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.menu_button("File", |ui| {
            egui::gui_zoom::zoom_menu_buttons(ui);
            ui.weak(format!(
                "Current zoom: {:.0}%",
                100.0 * ui.ctx().zoom_factor()
            ))
            .on_hover_text("The UI zoom level, on top of the operating system's default value");
            ui.separator();

            if ui.button("Quit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn ui_active_pages_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("side_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.process_shortcuts(ui);

                ui.vertical_centered(|ui| {
                    ui.heading("Active Pages");
                });

                ui.separator();

                self.ui_pages_list(ui);
            });
    }

    fn ui_pages_list(&mut self, ui: &mut egui::Ui) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                if self.active_pages.is_empty() {
                    ui.label("NO PAGES ARE ACTIVE.\nUse top menu to activate a page");
                }
                let mut to_deactivate = Vec::new();
                for (i, page) in self.active_pages.iter_mut().enumerate() {
                    let mut is_open = page.is_page_open();
                    ui.horizontal(|ui| {
                        let is_open_before = is_open;
                        if ui.button("x").clicked() {
                            to_deactivate.push(i); // Mark page for removal
                        }
                        if ui.toggle_value(&mut is_open, page.title()).middle_clicked() {
                            to_deactivate.push(i); // Mark page for removal
                        };
                        if is_open != is_open_before {
                            if is_open {
                                page.open_page();
                            } else {
                                page.close_page();
                            }
                        }
                    });
                }

                // Deactivate marked pages
                to_deactivate.sort_unstable(); // Should already be sorted but put here because it is assumed in following loop
                while let Some(marked_index) = to_deactivate.pop() {
                    self.active_pages.remove(marked_index);
                }

                ui.separator();

                if ui.button("Open All Pages").clicked() {
                    self.open_all_pages();
                }
                if ui.button("Close All Pages").clicked() {
                    self.close_all_pages();
                }
                if ui.button("Deactivate All Pages").clicked() {
                    self.deactivate_all_pages();
                }
                if ui.button("Sort Pages by Name").clicked() {
                    self.sort_pages_by_name();
                }
                if ui
                    .add(
                        egui::Button::new("Organize Pages").shortcut_text(
                            ui.ctx().format_shortcut(&self.shortcuts.organize_pages),
                        ),
                    )
                    .clicked()
                {
                    do_organize_pages(ui);
                }
            });
        });
    }

    fn deactivate_all_pages(&mut self) {
        self.active_pages.clear();
    }

    fn close_all_pages(&mut self) {
        self.active_pages
            .iter_mut()
            .for_each(|page| page.close_page())
    }

    fn open_all_pages(&mut self) {
        self.active_pages
            .iter_mut()
            .for_each(|page| page.open_page())
    }

    fn sort_pages_by_name(&mut self) {
        self.active_pages.sort_by_key(|x| x.title());
    }

    fn process_shortcuts(&mut self, ui: &mut egui::Ui) {
        if ui.input_mut(|i| i.consume_shortcut(&self.shortcuts.organize_pages)) {
            do_organize_pages(ui);
        }
    }
}

fn do_organize_pages(ui: &mut egui::Ui) {
    ui.ctx().memory_mut(|mem| mem.reset_areas());
}

#[inline]
pub fn wake_fn(ctx: egui::Context) -> impl UiCallBack {
    move || ctx.request_repaint()
}
