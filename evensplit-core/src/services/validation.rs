//! Validation layer - checks that run before data reaches the calculations
//!
//! The balance and settlement calculations accept anything and skip what they
//! cannot use. Everything that should be rejected is rejected here, with a
//! message fit to show the user.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{name_of, Expense, Group, Person, SplitType, SETTLE_TOLERANCE};

/// Letters, spaces, hyphens and apostrophes
const NAME_PATTERN: &str = r"^[a-zA-Z\s'-]+$";

/// Validate a new person's name against the existing people
///
/// Returns the trimmed name on success.
pub fn validate_person_name(name: &str, people: &[Person]) -> Result<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(Error::validation("Please enter a name to add a person"));
    }

    let name_re = Regex::new(NAME_PATTERN).map_err(|e| Error::Other(e.to_string()))?;
    if !name_re.is_match(trimmed) {
        return Err(Error::validation(
            "Names can only contain letters, spaces, hyphens (-) and apostrophes (')",
        ));
    }

    let lowered = trimmed.to_lowercase();
    if people.iter().any(|p| p.name.to_lowercase() == lowered) {
        return Err(Error::validation(format!(
            "\"{}\" is already in the list, use a unique name or nickname",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}

/// Check that a person may be removed from the group
///
/// Removal is blocked while any expense names the person, otherwise their
/// shares would silently drop out of the balances.
pub fn check_person_removal(id: &str, people: &[Person], expenses: &[Expense]) -> Result<()> {
    if !people.iter().any(|p| p.id == id) {
        return Err(Error::not_found(format!("Person {}", id)));
    }

    if expenses.iter().any(|e| e.involves(id)) {
        return Err(Error::denied(format!(
            "cannot remove {} because they are involved in existing expenses, delete those expenses first",
            name_of(people, id)
        )));
    }

    if people.len() <= 1 {
        return Err(Error::denied(
            "cannot remove the last person, the group must have at least one member",
        ));
    }

    Ok(())
}

/// Equal splits need a participant; custom splits must add up to the total
pub fn validate_expense_split(expense: &Expense) -> bool {
    match expense.split_type {
        SplitType::Equal => !expense.split_between.is_empty(),
        SplitType::Custom => match &expense.custom_amounts {
            Some(amounts) => {
                let total: f64 = expense
                    .split_between
                    .iter()
                    .filter_map(|id| amounts.get(id))
                    .sum();
                (total - expense.amount).abs() <= SETTLE_TOLERANCE
            }
            None => false,
        },
    }
}

/// Fail on the first expense id that does not belong to a known person
///
/// This is the strict counterpart of the calculations' habit of skipping
/// unknown ids.
pub fn check_references(group: &Group) -> Result<()> {
    let known: HashSet<&str> = group.people.iter().map(|p| p.id.as_str()).collect();

    for expense in &group.expenses {
        let custom_keys = expense
            .custom_amounts
            .iter()
            .flat_map(|amounts| amounts.keys());
        let referenced = std::iter::once(&expense.paid_by)
            .chain(expense.split_between.iter())
            .chain(custom_keys);

        for id in referenced {
            if !known.contains(id.as_str()) {
                return Err(Error::not_found(format!(
                    "expense {} references unknown person '{}'",
                    expense.id, id
                )));
            }
        }
    }

    Ok(())
}

/// Raw expense fields as entered, before they become an [`Expense`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub paid_by: Option<String>,
    pub split_type: SplitType,
    pub split_between: Vec<String>,
    pub custom_amounts: HashMap<String, f64>,
}

impl ExpenseDraft {
    /// Start an equal split draft
    pub fn equal(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        paid_by: impl Into<String>,
        split_between: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            date: Some(date),
            paid_by: Some(paid_by.into()),
            split_type: SplitType::Equal,
            split_between: split_between.iter().map(|s| s.to_string()).collect(),
            custom_amounts: HashMap::new(),
        }
    }

    /// Start a custom split draft, participants taken from `amounts`
    pub fn custom(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        paid_by: impl Into<String>,
        amounts: &[(&str, f64)],
    ) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            date: Some(date),
            paid_by: Some(paid_by.into()),
            split_type: SplitType::Custom,
            split_between: amounts.iter().map(|(id, _)| id.to_string()).collect(),
            custom_amounts: amounts
                .iter()
                .map(|(id, value)| (id.to_string(), *value))
                .collect(),
        }
    }

    /// Run every check a new expense must pass
    pub fn validate(&self, people: &[Person]) -> Result<()> {
        if people.len() < 2 {
            return Err(Error::denied(
                "you need at least 2 people to split expenses",
            ));
        }

        let mut missing = Vec::new();
        if self.description.trim().is_empty() {
            missing.push("Description".to_string());
        }
        if self.amount.map_or(true, |a| a == 0.0 || a.is_nan()) {
            missing.push("Amount".to_string());
        }
        if self.date.is_none() {
            missing.push("Date".to_string());
        }
        let paid_by = self.paid_by.as_deref().filter(|id| !id.is_empty());
        if paid_by.is_none() {
            missing.push("Payer (Paid By)".to_string());
        }
        if self.split_between.is_empty() {
            missing.push("At least one person to split with".to_string());
        }
        if self.split_type == SplitType::Custom {
            for id in &self.split_between {
                if !self.custom_amounts.get(id).is_some_and(|v| *v > 0.0) {
                    missing.push(format!("Custom amount for {}", name_of(people, id)));
                }
            }
        }
        if !missing.is_empty() {
            return Err(Error::MissingFields(missing));
        }

        let amount = self.amount.unwrap_or_default();
        if amount <= 0.0 || !amount.is_finite() {
            return Err(Error::validation(
                "the expense amount must be greater than zero",
            ));
        }

        let known = |id: &str| people.iter().any(|p| p.id == id);
        if let Some(payer) = paid_by.filter(|id| !known(*id)) {
            return Err(Error::not_found(format!("Payer {}", payer)));
        }
        if let Some(id) = self.split_between.iter().find(|id| !known(id.as_str())) {
            return Err(Error::not_found(format!("Participant {}", id)));
        }

        match self.split_type {
            SplitType::Equal if self.split_between.len() < 2 => {
                return Err(Error::validation(
                    "an equal split must involve at least 2 people",
                ));
            }
            SplitType::Custom
                if self.split_between.len() == 1
                    && Some(self.split_between[0].as_str()) == paid_by =>
            {
                return Err(Error::validation(
                    "you cannot split an expense only with yourself",
                ));
            }
            _ => {}
        }

        let expense = self.clone().into_expense(0);
        if !validate_expense_split(&expense) {
            let total: f64 = expense.shares().iter().map(|(_, share)| share).sum();
            return Err(Error::validation(format!(
                "the custom amounts add up to {:.2} but the expense total is {:.2} (difference {:.2})",
                total,
                amount,
                amount - total
            )));
        }

        Ok(())
    }

    /// Build the expense, keeping only custom amounts for listed participants
    ///
    /// Call [`ExpenseDraft::validate`] first; missing fields become defaults.
    pub fn into_expense(self, id: i64) -> Expense {
        let custom_amounts = match self.split_type {
            SplitType::Equal => None,
            SplitType::Custom => {
                let mut amounts = self.custom_amounts;
                amounts.retain(|id, _| self.split_between.contains(id));
                Some(amounts)
            }
        };

        Expense {
            id,
            description: self.description.trim().to_string(),
            amount: self.amount.unwrap_or_default(),
            paid_by: self.paid_by.unwrap_or_default(),
            split_between: self.split_between,
            date: self.date,
            split_type: self.split_type,
            custom_amounts,
        }
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: Some(expense.amount),
            date: expense.date,
            paid_by: Some(expense.paid_by.clone()),
            split_type: expense.split_type,
            split_between: expense.split_between.clone(),
            custom_amounts: expense.custom_amounts.clone().unwrap_or_default(),
        }
    }
}

/// A problem found while auditing a group document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditIssue {
    /// What the issue is about, e.g. "person 2" or "expense 17"
    pub subject: String,
    pub message: String,
}

impl AuditIssue {
    fn new(subject: impl Into<String>, error: Error) -> Self {
        Self {
            subject: subject.into(),
            message: error.to_string(),
        }
    }
}

/// Run every validation rule over a whole group and collect all problems
pub fn audit_group(group: &Group) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    let mut seen_ids = HashSet::new();
    for (pos, person) in group.people.iter().enumerate() {
        let subject = format!("person {}", person.id);
        if !seen_ids.insert(person.id.as_str()) {
            issues.push(AuditIssue::new(
                subject.clone(),
                Error::validation("duplicate person id"),
            ));
        }
        if let Err(e) = validate_person_name(&person.name, &group.people[..pos]) {
            issues.push(AuditIssue::new(subject, e));
        }
    }

    let mut seen_expenses = HashSet::new();
    for expense in &group.expenses {
        let subject = format!("expense {}", expense.id);
        if !seen_expenses.insert(expense.id) {
            issues.push(AuditIssue::new(
                subject.clone(),
                Error::validation("duplicate expense id"),
            ));
        }
        if let Err(e) = ExpenseDraft::from(expense).validate(&group.people) {
            issues.push(AuditIssue::new(subject, e));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> Vec<Person> {
        vec![
            Person::with_id("1", "Alice"),
            Person::with_id("2", "Bob"),
            Person::with_id("3", "Charlie"),
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_person_name_rules() {
        let people = trio();
        assert_eq!(
            validate_person_name("  Mary-Jane O'Neil ", &people).unwrap(),
            "Mary-Jane O'Neil"
        );
        assert!(matches!(
            validate_person_name("   ", &people),
            Err(Error::Validation(_))
        ));
        assert!(validate_person_name("R2D2", &people).is_err());
        assert!(validate_person_name("bob", &people)
            .unwrap_err()
            .to_string()
            .contains("already in the list"));
    }

    #[test]
    fn test_person_removal_rules() {
        let people = trio();
        let expenses = vec![Expense::equal(1, "Lunch", 30.0, "1", &["1", "2"])];

        assert!(matches!(
            check_person_removal("1", &people, &expenses),
            Err(Error::Denied(_))
        ));
        assert!(matches!(
            check_person_removal("2", &people, &expenses),
            Err(Error::Denied(_))
        ));
        assert!(check_person_removal("3", &people, &expenses).is_ok());
        assert!(matches!(
            check_person_removal("9", &people, &expenses),
            Err(Error::NotFound(_))
        ));

        let last = vec![Person::with_id("1", "Alice")];
        assert!(matches!(
            check_person_removal("1", &last, &[]),
            Err(Error::Denied(_))
        ));
    }

    #[test]
    fn test_validate_expense_split() {
        let equal = Expense::equal(1, "Lunch", 100.0, "1", &["1", "2"]);
        assert!(validate_expense_split(&equal));

        let matching = Expense::custom(2, "Hotel", 100.0, "1", &[("1", 25.0), ("2", 35.0), ("3", 40.0)]);
        assert!(validate_expense_split(&matching));

        let short = Expense::custom(3, "Hotel", 100.0, "1", &[("1", 30.0), ("2", 30.0)]);
        assert!(!validate_expense_split(&short));

        let within_tolerance = Expense::custom(4, "Pizza", 10.0, "1", &[("1", 3.33), ("2", 6.665)]);
        assert!(validate_expense_split(&within_tolerance));
    }

    #[test]
    fn test_valid_drafts_pass() {
        let people = trio();
        assert!(ExpenseDraft::equal("Lunch", 30.0, date(), "1", &["1", "2", "3"])
            .validate(&people)
            .is_ok());
        assert!(ExpenseDraft::custom("Hotel", 100.0, date(), "1", &[("2", 60.0), ("3", 40.0)])
            .validate(&people)
            .is_ok());
    }

    #[test]
    fn test_draft_needs_two_people() {
        let people = vec![Person::with_id("1", "Alice")];
        let draft = ExpenseDraft::equal("Lunch", 30.0, date(), "1", &["1"]);
        assert!(matches!(draft.validate(&people), Err(Error::Denied(_))));
    }

    #[test]
    fn test_draft_reports_all_missing_fields() {
        let draft = ExpenseDraft {
            description: " ".to_string(),
            amount: None,
            date: None,
            paid_by: None,
            split_type: SplitType::Custom,
            split_between: vec!["2".to_string()],
            custom_amounts: HashMap::new(),
        };

        match draft.validate(&trio()) {
            Err(Error::MissingFields(fields)) => assert_eq!(
                fields,
                vec![
                    "Description",
                    "Amount",
                    "Date",
                    "Payer (Paid By)",
                    "Custom amount for Bob",
                ]
            ),
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_draft_business_rules() {
        let people = trio();

        let negative = ExpenseDraft::equal("Refund", -5.0, date(), "1", &["1", "2"]);
        assert!(matches!(negative.validate(&people), Err(Error::Validation(_))));

        let lonely = ExpenseDraft::equal("Coffee", 5.0, date(), "1", &["1"]);
        assert!(lonely
            .validate(&people)
            .unwrap_err()
            .to_string()
            .contains("at least 2 people"));

        let self_only = ExpenseDraft::custom("Coffee", 5.0, date(), "1", &[("1", 5.0)]);
        assert!(self_only
            .validate(&people)
            .unwrap_err()
            .to_string()
            .contains("only with yourself"));

        let mismatch = ExpenseDraft::custom("Hotel", 100.0, date(), "1", &[("1", 30.0), ("2", 30.0)]);
        assert!(mismatch
            .validate(&people)
            .unwrap_err()
            .to_string()
            .contains("difference 40.00"));

        let half_cent_off = ExpenseDraft::custom("Hotel", 100.0, date(), "1", &[("1", 50.0), ("2", 49.995)]);
        assert!(half_cent_off.validate(&people).is_ok());
        assert!(validate_expense_split(&half_cent_off.into_expense(1)));

        let two_cents_off = ExpenseDraft::custom("Hotel", 100.0, date(), "1", &[("1", 50.0), ("2", 49.98)]);
        assert!(two_cents_off.validate(&people).is_err());
        assert!(!validate_expense_split(&two_cents_off.into_expense(2)));

        let stranger = ExpenseDraft::equal("Taxi", 20.0, date(), "9", &["1", "2"]);
        assert!(matches!(stranger.validate(&people), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_into_expense_drops_unlisted_custom_amounts() {
        let mut draft = ExpenseDraft::custom("Hotel", 100.0, date(), "1", &[("2", 60.0), ("3", 40.0)]);
        draft.custom_amounts.insert("1".to_string(), 5.0);

        let expense = draft.into_expense(7);
        assert_eq!(expense.id, 7);
        let amounts = expense.custom_amounts.unwrap();
        assert_eq!(amounts.len(), 2);
        assert!(!amounts.contains_key("1"));
    }

    #[test]
    fn test_check_references() {
        let mut group = Group::new(
            trio(),
            vec![Expense::equal(1, "Lunch", 30.0, "1", &["1", "2"])],
        );
        assert!(check_references(&group).is_ok());

        group
            .expenses
            .push(Expense::custom(2, "Hotel", 50.0, "2", &[("1", 20.0), ("ghost", 30.0)]));
        let err = check_references(&group).unwrap_err();
        assert!(err.to_string().contains("expense 2"));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_audit_group_collects_every_issue() {
        let group = Group::new(
            vec![
                Person::with_id("1", "Alice"),
                Person::with_id("2", "alice"),
                Person::with_id("2", "Bob"),
            ],
            vec![
                Expense::equal(1, "Lunch", 30.0, "1", &["1", "2"]).on(date()),
                Expense::equal(1, "", 30.0, "1", &["1", "2"]).on(date()),
            ],
        );

        let issues = audit_group(&group);
        let subjects: Vec<&str> = issues.iter().map(|i| i.subject.as_str()).collect();

        assert_eq!(subjects, vec!["person 2", "person 2", "expense 1", "expense 1"]);
        assert!(issues[3].message.contains("Description"));
    }
}
