// Dashboard payload types

use serde::{Deserialize, Serialize};

/// Card at the top of the home screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCard {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentCard {
    pub name: String,
    pub school: String,
    pub class: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub pending_tasks: u32,
    pub next_class_date: String,
    pub average_grade: f32,
    pub next_exam: String,
    pub messages: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentKind {
    Party,
    Exam,
    Meeting,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Commitment {
    pub date: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CommitmentKind,
}

/// Rendered dashboard for the current session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub user: UserCard,
    pub student: StudentCard,
    pub stats: DashboardStats,
    pub commitments: Vec<Commitment>,
}

/// Static part of the dashboard; the user card is filled per session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardTemplate {
    /// Shown when nobody is signed in
    #[serde(default = "default_fallback_name")]
    pub fallback_user_name: String,
    #[serde(default = "default_user_avatar")]
    pub user_avatar: String,
    pub student: StudentCard,
    pub stats: DashboardStats,
    #[serde(default)]
    pub commitments: Vec<Commitment>,
}

fn default_fallback_name() -> String {
    "Usuário".to_string()
}

fn default_user_avatar() -> String {
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=150&q=80"
        .to_string()
}

impl Default for DashboardTemplate {
    fn default() -> Self {
        Self {
            fallback_user_name: default_fallback_name(),
            user_avatar: default_user_avatar(),
            student: StudentCard {
                name: "Maurício Fabrício da Silva".to_string(),
                school: "Escola Estadual Djalma".to_string(),
                class: "6 Ano D".to_string(),
                avatar: "https://i.pinimg.com/736x/78/7f/b4/787fb4d6d5085e2c34d71611a0219d16.jpg"
                    .to_string(),
            },
            stats: DashboardStats {
                pending_tasks: 2,
                next_class_date: "08/10/2025".to_string(),
                average_grade: 8.2,
                next_exam: "15/10 • Prova de Matemática 2TRI".to_string(),
                messages: 4,
            },
            commitments: vec![
                Commitment {
                    date: "11/10".to_string(),
                    title: "Festa do Dia das Crianças da turma 6D".to_string(),
                    kind: CommitmentKind::Party,
                },
                Commitment {
                    date: "14/10".to_string(),
                    title: "Sessão bimestral com psicóloga".to_string(),
                    kind: CommitmentKind::Meeting,
                },
                Commitment {
                    date: "20/10".to_string(),
                    title: "Entrega do Trabalho de História".to_string(),
                    kind: CommitmentKind::Exam,
                },
            ],
        }
    }
}
