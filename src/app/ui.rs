use egui::{ComboBox, Context, RichText, Ui};

use super::catalog::CATALOG;
use super::state::ApiStatus;
use super::styles::{Palette, PanelStyle};
use super::tasks::Dispatcher;
use super::view::{Page, Tab};
use super::App;
use crate::metrics::{Overview, TierReport, Tone};
use crate::types::{AnalysisResult, Community, Issues};

const GENERAL_GUIDELINES: &[(&str, &str)] = &[
    (
        "Read the contributing guide",
        "check the project's CONTRIBUTING.md before you start",
    ),
    (
        "Start small",
        "fixing typos and improving documentation are good first steps",
    ),
    (
        "Join the discussion",
        "constructive comments on issues and pull requests are contributions too",
    ),
    (
        "Follow the conventions",
        "stick to the project's code style and commit message rules",
    ),
    (
        "Be patient",
        "open-source communities can take a while to respond",
    ),
];

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context, dispatcher: &Dispatcher) {
    let palette = Palette::default();
    let style = PanelStyle::default();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("🧭 Repo Compass");
            ui.label("Open-source contributor navigator");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                draw_api_status(ui, &app.api_status, &palette);
            });
        });
        ui.separator();

        // Navigation
        ui.horizontal(|ui| {
            if ui
                .add_enabled(app.history.can_go_back(), egui::Button::new("◀"))
                .clicked()
            {
                app.go_back();
            }
            if ui
                .add_enabled(app.history.can_go_forward(), egui::Button::new("▶"))
                .clicked()
            {
                app.go_forward();
            }
            for page in [Page::Home, Page::Explorer] {
                if ui.selectable_label(app.view.page == page, page.title()).clicked() {
                    app.navigate(page);
                }
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match app.view.page {
            Page::Home => draw_home(ui, app, &palette),
            Page::Explorer => draw_explorer(ui, app, dispatcher, &palette, &style),
        });
    });

    // The recommendations tab fetches for whatever repository it is bound to
    dispatcher.refresh_recommendations(app);
}

fn draw_api_status(ui: &mut Ui, status: &ApiStatus, palette: &Palette) {
    match status {
        ApiStatus::Unknown => {
            ui.spinner();
            ui.label("Checking API...");
        }
        ApiStatus::Available(payload) => {
            ui.colored_label(palette.success, "✅ API available")
                .on_hover_text(payload.to_string());
        }
        ApiStatus::Unavailable => {
            ui.colored_label(palette.danger, "❌ API unavailable");
        }
    }
}

fn draw_home(ui: &mut Ui, app: &App, palette: &Palette) {
    ui.heading("Welcome to Repo Compass");
    ui.add_space(10.0);
    ui.label(
        "Repo Compass helps newcomers find a good place to start, growing contributors \
         plan their path, and maintainers keep an eye on community health.",
    );
    ui.add_space(10.0);

    ui.strong("What you can do");
    ui.label("• Pick a well-known project or type any owner/repo");
    ui.label("• Inspect activity, community and issue-handling indicators");
    ui.label("• Get contribution recommendations grouped by priority");
    ui.add_space(10.0);

    let api = match app.api_status {
        ApiStatus::Available(_) => RichText::new("API: online").color(palette.success),
        ApiStatus::Unavailable => RichText::new("API: offline").color(palette.danger),
        ApiStatus::Unknown => RichText::new("API: checking"),
    };
    ui.label(api);
}

fn draw_explorer(
    ui: &mut Ui,
    app: &mut App,
    dispatcher: &Dispatcher,
    palette: &Palette,
    style: &PanelStyle,
) {
    ui.heading("Project Explorer");
    ui.separator();

    // Category selection
    ui.label("Category:");
    let mut category = app.selection.category().unwrap_or_default().to_string();
    let prev_category = category.clone();
    ComboBox::new("category_selector", "")
        .selected_text(if category.is_empty() { "Choose..." } else { category.as_str() })
        .show_ui(ui, |ui| {
            for entry in CATALOG {
                ui.selectable_value(&mut category, entry.name.to_string(), entry.name);
            }
        });
    if category != prev_category {
        app.selection.select_category(&category);
    }

    // Project selection
    ui.label("Project:");
    let mut project = app.selection.project.clone();
    ComboBox::new("project_selector", "")
        .selected_text(&project)
        .show_ui(ui, |ui| {
            for entry in CATALOG {
                ui.label(RichText::new(entry.name).weak());
                for name in entry.projects {
                    ui.selectable_value(&mut project, name.to_string(), *name);
                }
            }
        });
    if project != app.selection.project {
        app.selection.select_project(&project);
    }

    ui.label("Or enter a project (owner/repo):");
    ui.text_edit_singleline(&mut app.selection.project);

    ui.horizontal(|ui| {
        let label = if app.is_analyzing() {
            "Analyzing..."
        } else {
            "🔍 Analyze project"
        };
        if ui
            .add_enabled(!app.is_analyzing(), egui::Button::new(label))
            .clicked()
        {
            dispatcher.analyze(app);
        }
        if app.analysis_result().is_some() && ui.button("🗑 Clear results").clicked() {
            app.clear_results();
        }
    });

    if app.is_analyzing() {
        ui.spinner();
    }

    if let Some(message) = app.error_message() {
        egui::Frame::none()
            .fill(palette.danger)
            .inner_margin(egui::Margin::same(style.card_padding))
            .rounding(style.rounding)
            .show(ui, |ui| {
                ui.colored_label(palette.text_on_fill, message);
            });
    }

    let Some(result) = app.analysis_result().cloned() else {
        return;
    };
    let report = TierReport::from_result(&result);

    ui.separator();
    draw_overview(ui, &Overview::from_result(&result), style);
    if let Some(time) = app.last_analysis_time {
        ui.small(format!("Analyzed at {}", time.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    ui.separator();

    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            if ui
                .selectable_label(app.view.active_tab == tab, tab.title())
                .clicked()
            {
                app.select_tab(tab);
            }
        }
    });
    ui.separator();

    match app.view.active_tab {
        Tab::Activity => draw_activity(ui, &result, &report, palette, style),
        Tab::Community => draw_community(ui, &result.community, &report, palette, style),
        Tab::Issues => draw_issues(ui, &result.issues, &report, palette, style),
        Tab::Recommendations => draw_recommendations(ui, app, palette),
    }
}

fn draw_overview(ui: &mut Ui, overview: &Overview, style: &PanelStyle) {
    ui.heading(format!("📋 {}", overview.full_name));
    ui.columns(4, |columns| {
        metric_card(&mut columns[0], "📈 Activity score", overview.activity_score.to_string(), style);
        metric_card(&mut columns[1], "👥 Contributors", overview.contributors.to_string(), style);
        metric_card(
            &mut columns[2],
            "👶 Newbie friendly",
            format!("{}%", overview.newbie_friendly_score),
            style,
        );
        metric_card(&mut columns[3], "📁 Platform", overview.platform.clone(), style);
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: String, style: &PanelStyle) {
    ui.group(|ui| {
        ui.label(title);
        ui.label(RichText::new(value).size(style.metric_size).strong());
    });
}

fn advisory(ui: &mut Ui, tone: Tone, text: &str, palette: &Palette, style: &PanelStyle) {
    egui::Frame::none()
        .fill(palette.fill(tone))
        .inner_margin(egui::Margin::same(style.card_padding))
        .rounding(style.rounding)
        .show(ui, |ui| {
            ui.colored_label(palette.text_on_fill, text);
        });
}

fn draw_activity(
    ui: &mut Ui,
    result: &AnalysisResult,
    report: &TierReport,
    palette: &Palette,
    style: &PanelStyle,
) {
    ui.heading("Project activity");
    ui.horizontal(|ui| {
        let diameter = style.gauge_radius * 2.0;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), style.gauge_radius, palette.fill(report.activity.tone()));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            result.activity.score.to_string(),
            egui::FontId::proportional(style.metric_size),
            palette.text_on_fill,
        );

        ui.vertical(|ui| {
            ui.strong("Trend");
            ui.label(
                RichText::new(format!("{} {}", report.trend.emoji, report.trend.label)).size(20.0),
            );
            if let Some(text) = report.trend.advisory {
                advisory(ui, report.trend.tone, text, palette, style);
            }
        });
    });
}

fn draw_community(
    ui: &mut Ui,
    community: &Community,
    report: &TierReport,
    palette: &Palette,
    style: &PanelStyle,
) {
    ui.heading("Community health");
    ui.columns(3, |columns| {
        metric_card(&mut columns[0], "👥 Total contributors", community.total_contributors.to_string(), style);
        metric_card(&mut columns[1], "🏃 Active contributors", community.active_contributors.to_string(), style);
        metric_card(&mut columns[2], "🚌 Bus factor", community.bus_factor.to_string(), style);
    });
    advisory(
        ui,
        report.bus_factor.tone(),
        report.bus_factor.advisory(),
        palette,
        style,
    );

    if !community.key_contributors.is_empty() {
        ui.add_space(10.0);
        ui.strong("🔑 Key contributors");
        egui::Grid::new("key_contributors")
            .striped(true)
            .num_columns(2)
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Contributions");
                ui.end_row();
                for contributor in &community.key_contributors {
                    ui.label(&contributor.name);
                    ui.label(contributor.contributions.to_string());
                    ui.end_row();
                }
            });
    }
}

fn draw_issues(
    ui: &mut Ui,
    issues: &Issues,
    report: &TierReport,
    palette: &Palette,
    style: &PanelStyle,
) {
    ui.heading("Issue handling");
    ui.columns(4, |columns| {
        metric_card(&mut columns[0], "🆕 New issues", issues.new_issues.to_string(), style);
        metric_card(&mut columns[1], "✅ Closed issues", issues.closed_issues.to_string(), style);
        metric_card(
            &mut columns[2],
            "⏱ Resolution efficiency",
            format!("{}%", issues.resolution_efficiency),
            style,
        );
        metric_card(
            &mut columns[3],
            "⏰ Avg. response time",
            format!("{} h", issues.avg_response_time),
            style,
        );
    });
    advisory(
        ui,
        report.resolution.tone(),
        report.resolution.advisory(),
        palette,
        style,
    );
}

fn draw_recommendations(ui: &mut Ui, app: &App, palette: &Palette) {
    ui.heading("Contribution recommendations");

    if app.recommendations_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading recommendations...");
        });
    } else {
        let groups = app.recommendation_groups();
        if groups.is_empty() {
            ui.label("No specific recommendations yet");
        }
        for (priority, recs) in groups.iter() {
            ui.add_space(8.0);
            ui.strong(format!("{} {}", priority.marker(), priority.label()));
            for rec in recs {
                ui.group(|ui| {
                    ui.label(RichText::new(&rec.title).strong());
                    ui.label(&rec.description);
                    ui.small(format!("Type: {}", rec.kind));
                });
            }
        }
    }

    ui.add_space(10.0);
    ui.strong("General guidelines");
    for (title, detail) in GENERAL_GUIDELINES {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(*title).strong().color(palette.accent));
            ui.label(format!("- {}", detail));
        });
    }
}
