//! Data export functionality for external analysis and backup.
//!
//! Extracts a planned day, the task list or a completion trend into CSV,
//! JSON or Excel files. CSV targets spreadsheet import, JSON programmatic
//! processing, Excel formatted reports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sesh::libs::export::{Exporter, ExportFormat};
//! use chrono::NaiveDate;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export_plan(1, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())?;
//! # anyhow::Ok(())
//! ```

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, planner, task::TaskFilter, trend},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility
    Csv,
    /// Pretty-printed JSON for programmatic processing
    Json,
    /// Excel workbook with header formatting
    Excel,
}

/// Data categories available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// A single day's session plan
    Plan,
    /// The profile's task list
    Tasks,
    /// Per-day completion statistics over a date range
    Trend,
}

/// One session slot in export form; all fields are pre-formatted strings
/// for consistent presentation across formats.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSession {
    pub id: i64,
    pub start: String,
    pub end: String,
    pub status: String,
    pub task: String,
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportPlan {
    pub date: String,
    pub sessions: Vec<ExportSession>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub priority: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTrend {
    pub from: String,
    pub to: String,
    pub days: Vec<ExportDayRate>,
    pub overall_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDayRate {
    pub date: String,
    pub sessions: usize,
    pub completed: usize,
    pub rate: f64,
}

/// Export handler holding the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped file
    /// name such as `sesh_export_20250115_143022.csv` is generated.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("sesh_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Exports one day's session plan for a profile.
    pub fn export_plan(&self, user_id: i64, date: NaiveDate) -> Result<()> {
        let plan = self.gather_plan_data(user_id, date)?;

        match self.format {
            ExportFormat::Csv => self.export_plan_csv(&plan)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&plan)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_plan_excel(&plan)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports a profile's task list.
    pub fn export_tasks(&self, user_id: i64) -> Result<()> {
        let tasks = Tasks::new()?.fetch(TaskFilter::ByUser(user_id))?;

        let export_tasks: Vec<ExportTask> = tasks
            .into_iter()
            .map(|t| ExportTask {
                id: t.id.unwrap_or(0),
                name: t.name,
                description: t.description,
                priority: t.priority.as_str().to_string(),
            })
            .collect();

        match self.format {
            ExportFormat::Csv => self.export_tasks_csv(&export_tasks)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&export_tasks)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_tasks_excel(&export_tasks)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports per-day completion statistics over an inclusive date range.
    pub fn export_trend(&self, user_id: i64, from: NaiveDate, to: NaiveDate) -> Result<()> {
        let trend_data = self.gather_trend_data(user_id, from, to)?;

        match self.format {
            ExportFormat::Csv => self.export_trend_csv(&trend_data)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&trend_data)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_trend_excel(&trend_data)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn gather_plan_data(&self, user_id: i64, date: NaiveDate) -> Result<ExportPlan> {
        let (sessions, tasks) = planner::sessions_for_date(user_id, date)?;
        if sessions.is_empty() {
            return Err(msg_error_anyhow!(Message::NoSessionsForDate(date.to_string())));
        }

        Ok(ExportPlan {
            date: date.format("%Y-%m-%d").to_string(),
            sessions: sessions
                .into_iter()
                .map(|s| ExportSession {
                    id: s.id.unwrap_or(0),
                    start: s.start_time,
                    end: s.end_time,
                    status: s.status.as_str().to_string(),
                    task: s.task_id.and_then(|id| tasks.get(&id)).map(|t| t.name.clone()).unwrap_or_default(),
                    note: s.note,
                })
                .collect(),
        })
    }

    fn gather_trend_data(&self, user_id: i64, from: NaiveDate, to: NaiveDate) -> Result<ExportTrend> {
        let statuses = planner::sessions_in_range(user_id, from, to)?;
        let days = trend::completion_by_day(from, to, &statuses);

        Ok(ExportTrend {
            from: from.format("%Y-%m-%d").to_string(),
            to: to.format("%Y-%m-%d").to_string(),
            days: days
                .into_iter()
                .map(|d| ExportDayRate {
                    date: d.date.format("%Y-%m-%d").to_string(),
                    sessions: d.total,
                    completed: d.completed,
                    rate: (d.rate * 10.0).round() / 10.0,
                })
                .collect(),
            overall_rate: (trend::overall_rate(&statuses) * 10.0).round() / 10.0,
        })
    }

    fn export_plan_csv(&self, plan: &ExportPlan) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["ID", "Start", "End", "Status", "Task", "Note"])?;
        for session in &plan.sessions {
            wtr.write_record([
                session.id.to_string(),
                session.start.clone(),
                session.end.clone(),
                session.status.clone(),
                session.task.clone(),
                session.note.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_tasks_csv(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Name", "Description", "Priority"])?;

        for task in tasks {
            wtr.write_record([task.id.to_string(), task.name.clone(), task.description.clone(), task.priority.clone()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_trend_csv(&self, trend_data: &ExportTrend) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record([format!("Completion trend {} - {}", trend_data.from, trend_data.to), "".to_owned(), "".to_owned(), "".to_owned()])?;
        wtr.write_record(["Date", "Sessions", "Completed", "Rate"])?;

        for day in &trend_data.days {
            wtr.write_record([
                day.date.clone(),
                day.sessions.to_string(),
                day.completed.to_string(),
                format!("{:.1}%", day.rate),
            ])?;
        }

        let overall = format!("{:.1}%", trend_data.overall_rate);
        wtr.write_record(["", "", "", ""])?;
        wtr.write_record(["Overall", "", "", overall.as_str()])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_plan_excel(&self, plan: &ExportPlan) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, &format!("Sessions for {}", plan.date), &title_format)?;
        worksheet.write_string_with_format(2, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(2, 1, "Start", &header_format)?;
        worksheet.write_string_with_format(2, 2, "End", &header_format)?;
        worksheet.write_string_with_format(2, 3, "Status", &header_format)?;
        worksheet.write_string_with_format(2, 4, "Task", &header_format)?;
        worksheet.write_string_with_format(2, 5, "Note", &header_format)?;

        let mut row = 3;
        for session in &plan.sessions {
            worksheet.write_number(row, 0, session.id as f64)?;
            worksheet.write_string(row, 1, &session.start)?;
            worksheet.write_string(row, 2, &session.end)?;
            worksheet.write_string(row, 3, &session.status)?;
            worksheet.write_string(row, 4, &session.task)?;
            worksheet.write_string(row, 5, &session.note)?;
            row += 1;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_tasks_excel(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Name", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Description", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Priority", &header_format)?;

        for (i, task) in tasks.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_number(row, 0, task.id as f64)?;
            worksheet.write_string(row, 1, &task.name)?;
            worksheet.write_string(row, 2, &task.description)?;
            worksheet.write_string(row, 3, &task.priority)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_trend_excel(&self, trend_data: &ExportTrend) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, &format!("Completion trend {} - {}", trend_data.from, trend_data.to), &title_format)?;
        worksheet.write_string_with_format(2, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(2, 1, "Sessions", &header_format)?;
        worksheet.write_string_with_format(2, 2, "Completed", &header_format)?;
        worksheet.write_string_with_format(2, 3, "Rate", &header_format)?;

        let mut row = 3;
        for day in &trend_data.days {
            worksheet.write_string(row, 0, &day.date)?;
            worksheet.write_number(row, 1, day.sessions as f64)?;
            worksheet.write_number(row, 2, day.completed as f64)?;
            worksheet.write_string(row, 3, &format!("{:.1}%", day.rate))?;
            row += 1;
        }

        row += 1;
        worksheet.write_string(row, 0, "Overall")?;
        worksheet.write_string(row, 3, &format!("{:.1}%", trend_data.overall_rate))?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
