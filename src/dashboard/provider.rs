use crate::models::{DashboardData, DashboardTemplate, User, UserCard};

/// Static dashboard data source
#[derive(Debug, Clone, Default)]
pub struct DashboardProvider {
    template: DashboardTemplate,
}

impl DashboardProvider {
    pub fn new(template: DashboardTemplate) -> Self {
        Self { template }
    }

    /// Dashboard with the user card filled for `user`
    pub fn dashboard_for(&self, user: Option<&User>) -> DashboardData {
        let name = user
            .map(|u| u.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.template.fallback_user_name.clone());

        DashboardData {
            user: UserCard {
                name,
                avatar: self.template.user_avatar.clone(),
            },
            student: self.template.student.clone(),
            stats: self.template.stats.clone(),
            commitments: self.template.commitments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::seed_records;
    use crate::models::CommitmentKind;

    #[test]
    fn test_anonymous_dashboard_uses_fallback_name() {
        let provider = DashboardProvider::default();
        let data = provider.dashboard_for(None);

        assert_eq!(data.user.name, "Usuário");
        assert_eq!(data.student.school, "Escola Estadual Djalma");
        assert_eq!(data.stats.pending_tasks, 2);
        assert_eq!(data.commitments.len(), 3);
        assert_eq!(data.commitments[0].kind, CommitmentKind::Party);
    }

    #[test]
    fn test_dashboard_shows_user_name() {
        let provider = DashboardProvider::default();
        let user = seed_records()[1].user.clone();

        let data = provider.dashboard_for(Some(&user));
        assert_eq!(data.user.name, "Lívia Villar");
    }

    #[test]
    fn test_stats_serialize_in_camel_case() {
        let data = DashboardProvider::default().dashboard_for(None);
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["stats"]["nextClassDate"], "08/10/2025");
        assert_eq!(json["commitments"][1]["type"], "meeting");
    }
}
