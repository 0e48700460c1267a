use quiz_core::model::SessionSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_line: String,
    pub points_line: String,
}

#[must_use]
pub fn map_results(summary: &SessionSummary) -> ResultsVm {
    ResultsVm {
        score_line: format!("{} / {}", summary.correct_count, summary.total_questions),
        points_line: format!("Points: {}", summary.total_points),
    }
}
