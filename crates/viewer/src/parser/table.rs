use super::formats::*;
use super::traits::*;

/// Ordered classifier table with first-match-wins dispatch.
///
/// Order matters: a looser pattern placed ahead of a stricter one would
/// shadow it (the simple bracketed form accepts every line the module form
/// does, the five-field Django form accepts every six-field line).
pub struct ClassifierTable {
    classifiers: Vec<Box<dyn LineClassifier>>,
}

impl ClassifierTable {
    pub fn new(classifiers: Vec<Box<dyn LineClassifier>>) -> Self {
        Self { classifiers }
    }

    /// Application debug log: bracketed module form, then bracketed simple form.
    pub fn debug() -> Self {
        Self::new(vec![
            Box::new(BracketedModuleClassifier),
            Box::new(BracketedSimpleClassifier),
        ])
    }

    /// Celery log, line by line: worker header, then both Django forms.
    pub fn celery_lines() -> Self {
        Self::new(vec![
            Box::new(CeleryClassifier),
            Box::new(DjangoThreadedClassifier),
            Box::new(DjangoProcessClassifier),
        ])
    }

    /// Translation pipeline records. Same subset as the debug log; the
    /// views differ only in how they split and recover.
    pub fn translation() -> Self {
        Self::debug()
    }

    /// Every known format, most specific first.
    pub fn all() -> Self {
        Self::new(vec![
            Box::new(BracketedModuleClassifier),
            Box::new(BracketedSimpleClassifier),
            Box::new(CeleryClassifier),
            Box::new(DjangoThreadedClassifier),
            Box::new(DjangoProcessClassifier),
        ])
    }

    /// Classify one unit against the table.
    pub fn classify(&self, unit: &str) -> Result<LogEntry, ParseError> {
        if unit.len() > super::MAX_LINE_SIZE {
            return Err(ParseError::LineTooLarge(unit.len(), super::MAX_LINE_SIZE));
        }

        for classifier in &self.classifiers {
            match classifier.classify(unit) {
                Ok(entry) => return Ok(entry),
                Err(ParseError::NoMatch) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(ParseError::NoMatch)
    }

    pub fn formats(&self) -> Vec<LogFormat> {
        self.classifiers.iter().map(|c| c.format()).collect()
    }
}

impl Default for ClassifierTable {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_prefers_module_form() {
        let table = ClassifierTable::debug();
        let entry = table
            .classify("[04/Jun/2025 10:51:18] INFO [worker:42] 123 456 job started")
            .unwrap();
        assert_eq!(entry.format, LogFormat::BracketedModule);
        assert_eq!(entry.module, "worker");
    }

    #[test]
    fn test_debug_falls_through_to_simple_form() {
        let table = ClassifierTable::debug();
        let entry = table.classify("[04/Jun/2025 10:51:18] ERROR boom").unwrap();
        assert_eq!(entry.format, LogFormat::BracketedSimple);
        assert_eq!(entry.message, "boom");
    }

    #[test]
    fn test_debug_ignores_celery_and_django() {
        let table = ClassifierTable::debug();
        assert_eq!(
            table.classify("INFO 2025-06-04 10:51:18,412 vendor.tasks 123 456 starting run"),
            Err(ParseError::NoMatch)
        );
        assert_eq!(
            table.classify("[10/Jul/2025 13:25:13: INFO/MainProcess] ready"),
            Err(ParseError::NoMatch)
        );
    }

    #[test]
    fn test_celery_prefers_threaded_django() {
        let table = ClassifierTable::celery_lines();
        let entry = table
            .classify("INFO 2025-06-04 10:51:18,412 vendor.tasks 123 456 starting run")
            .unwrap();
        assert_eq!(entry.format, LogFormat::DjangoThreaded);
        assert_eq!(entry.thread_id, "456");
        assert_eq!(entry.message, "starting run");

        let entry = table
            .classify("INFO 2025-06-04 10:51:18,412 vendor.tasks 123 starting")
            .unwrap();
        assert_eq!(entry.format, LogFormat::DjangoProcess);
    }

    #[test]
    fn test_table_order() {
        assert_eq!(
            ClassifierTable::celery_lines().formats(),
            vec![LogFormat::CeleryHeader, LogFormat::DjangoThreaded, LogFormat::DjangoProcess]
        );
        assert_eq!(ClassifierTable::all().formats().len(), 5);
    }

    #[test]
    fn test_oversized_unit_rejected() {
        let table = ClassifierTable::all();
        let huge = format!("[04/Jun/2025 10:51:18] INFO {}", "x".repeat(super::super::MAX_LINE_SIZE));
        assert!(matches!(table.classify(&huge), Err(ParseError::LineTooLarge(_, _))));
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = ClassifierTable::new(Vec::new());
        assert_eq!(table.classify("[04/Jun/2025 10:51:18] INFO x"), Err(ParseError::NoMatch));
    }
}
