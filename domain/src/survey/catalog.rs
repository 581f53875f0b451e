//! The fixed Growth Index questionnaire.
//!
//! Ten categories of four yes/no questions each. The table is compiled into
//! the binary and never changes at runtime.

use serde::Serialize;

/// Number of questions in every category
pub const QUESTIONS_PER_CATEGORY: usize = 4;

/// A named group of survey questions contributing to one sub-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub questions: [&'static str; QUESTIONS_PER_CATEGORY],
}

impl Category {
    /// Returns `true` if `question` belongs to this category.
    pub fn contains(&self, question: &str) -> bool {
        self.questions.contains(&question)
    }
}

/// The immutable set of categories a survey is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Survey {
    categories: &'static [Category],
}

impl Survey {
    /// The standard Growth Index questionnaire.
    pub const fn growth_index() -> Self {
        Self {
            categories: &GROWTH_INDEX,
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category(&self, name: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category names in questionnaire order.
    pub fn category_names(&self) -> impl Iterator<Item = &'static str> {
        self.categories.iter().map(|c| c.name)
    }

    /// Every question in questionnaire order.
    pub fn questions(&self) -> impl Iterator<Item = &'static str> {
        self.categories.iter().flat_map(|c| c.questions.iter().copied())
    }

    pub fn question_count(&self) -> usize {
        self.categories.len() * QUESTIONS_PER_CATEGORY
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::growth_index()
    }
}

static GROWTH_INDEX: [Category; 10] = [
    Category {
        name: "Business Development",
        questions: [
            "Do you have sales resources that are exclusively focused on acquiring new customers?",
            "Do you have a value proposition that succinctly defines your company's competitive advantage?",
            "Do you have a robust lead generation engine that drives new opportunities?",
            "Does your sales team use a rolling 4-week activity plan to focus their time & results?",
        ],
    },
    Category {
        name: "Customer Management",
        questions: [
            "Do you have a defined and documented process to review the annual performance of your customer base?",
            "Do you rank your customers by profitability and revenue on an annual basis?",
            "Do you ask your customers what they think of your products and service?",
            "Do you measure customer retention?",
        ],
    },
    Category {
        name: "KPI's & Reporting",
        questions: [
            "Have you established a set of weekly/monthly key performance metrics that you track and monitor?",
            "Do you have an immediate view of your won \u{2044} lost record for potential sales for the past 12 months?",
            "Do you have challenges with obtaining weekly reports that deliver key insights to you and your team?",
            "Does your sales team see value in the established KPIs  and how they can shape their future performance?",
        ],
    },
    Category {
        name: "Market & Channel",
        questions: [
            "Do your growth plans use third-party data to establish achievable year-over-year targets?",
            "Is your growth plan built by vertical market and product type?",
            "Does your growth planning include an evaluation of your competitors?",
            "Do you use third-party data to define your market share by vertical and geography?",
        ],
    },
    Category {
        name: "People & Leadership",
        questions: [
            "Do you believe current leadership is performing well?",
            "Do you have low turnover in your sales team?",
            "Does your sales team understand their monthly activities and measure progress on a weekly basis?",
            "Do you have a promote from within culture?",
        ],
    },
    Category {
        name: "Pipeline Management",
        questions: [
            "Do you have an accurate view of all sales opportunities in your pipeline?",
            "Do you use your pipeline review meetings as an opportunity to train, coach & collaborate with your sales team?",
            "Do you review your deals in progress weekly to understand overall pipeline health?",
            "Do you have a process to actively address stalled or stuck deals in the pipeline?",
        ],
    },
    Category {
        name: "Process & Discipline",
        questions: [
            "Have you clearly defined the steps of your sales process from opening an opportunity to closing a deal?",
            "Do you conduct a weekly sales meeting to discuss past and future performance?",
            "Do you have a documented, standard process for deal evaluation & pricing approval?",
            "Does your company routinely use historical data to inform future decisions?",
        ],
    },
    Category {
        name: "Sales Forecasting",
        questions: [
            "Do you use historical sales data as a basis for your sales forecasting?",
            "Is your forecast built bottom up using a well-defined framework?",
            "Do you incorporate data from your CRM into the sales forecasting process?",
            "Do you adjust sales forecasts based on changes in your sales pipeline?",
        ],
    },
    Category {
        name: "Structure & Compensation",
        questions: [
            "Have you defined and documented roles and responsibilities for your sales team?",
            "Do you do an annual performance appraisal for each sales team member?",
            "Are your compensation plans aligned to your growth plan(s)?",
            "Is the organizational structure of your company well understood by your team and designed to drive performance?",
        ],
    },
    Category {
        name: "Technology & Automation",
        questions: [
            "Do you have a well-functioning CRM that provides meaningful weekly performance guidance for your sales team?",
            "Do you feel your company is held hostage to your systems or lack of systems?",
            "Do you currently use automation in your sales organization?",
            "Do you feel you are maximizing ROI from your technology spend?",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_growth_index_has_ten_categories() {
        let survey = Survey::growth_index();
        assert_eq!(survey.categories().len(), 10);
        assert_eq!(survey.question_count(), 40);
        assert_eq!(survey.questions().count(), 40);
    }

    #[test]
    fn test_category_order_is_stable() {
        let names: Vec<_> = Survey::growth_index().category_names().collect();
        assert_eq!(names.first(), Some(&"Business Development"));
        assert_eq!(names.last(), Some(&"Technology & Automation"));
    }

    #[test]
    fn test_question_texts_are_unique() {
        let survey = Survey::growth_index();
        let unique: HashSet<_> = survey.questions().collect();
        assert_eq!(unique.len(), survey.question_count());
    }

    #[test]
    fn test_category_lookup() {
        let survey = Survey::growth_index();
        let category = survey.category("Sales Forecasting").unwrap();
        assert!(category.contains("Is your forecast built bottom up using a well-defined framework?"));
        assert!(survey.category("Marketing").is_none());
    }
}
