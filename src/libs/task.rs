use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "Low" => TaskPriority::Low,
            "High" => TaskPriority::High,
            _ => TaskPriority::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub priority: TaskPriority,
    pub user_id: i64,
    pub created_at: Option<String>,
}

impl Task {
    pub fn new(name: &str, description: &str, priority: TaskPriority, user_id: i64) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            priority,
            user_id,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByUser(i64),
    ByIds(Vec<i64>),
}
