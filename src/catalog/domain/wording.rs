use crate::core::library::LibraryKind;

// Wording renders checkout and return notices. The defaults are the standard
// library text; other libraries override them to name their own context.
pub trait Wording {
    fn checked_out(&self, name: &str) -> String {
        format!("Book {} checked out successfully", name)
    }

    fn not_available(&self, name: &str) -> String {
        format!("Book {} is not available", name)
    }

    fn checkout_not_found(&self, id: &str) -> String {
        not_found(id)
    }

    fn returned(&self, name: &str) -> String {
        format!("Book {} returned successfully", name)
    }

    fn already_available(&self, name: &str) -> String {
        format!("Book {} is already available", name)
    }

    fn return_not_found(&self, id: &str) -> String {
        not_found(id)
    }
}

pub fn not_found(id: &str) -> String {
    format!("Book with ID {} not found", id)
}

#[derive(Debug, Default)]
pub struct StandardWording;

impl Wording for StandardWording {}

#[derive(Debug)]
pub struct SpecialWording {
    context: String,
}

impl SpecialWording {
    pub fn new(context: &str) -> Self {
        Self {
            context: context.to_string(),
        }
    }
}

impl Wording for SpecialWording {
    fn checked_out(&self, name: &str) -> String {
        format!("Book {} checked out successfully from {}", name, self.context)
    }

    fn not_available(&self, name: &str) -> String {
        format!("Book {} is not available in {}", name, self.context)
    }

    fn checkout_not_found(&self, id: &str) -> String {
        format!("Book with ID {} not found in {}", id, self.context)
    }

    fn returned(&self, name: &str) -> String {
        format!("Book {} returned successfully to {}", name, self.context)
    }

    fn already_available(&self, name: &str) -> String {
        format!("Book {} is already available in {}", name, self.context)
    }

    fn return_not_found(&self, id: &str) -> String {
        self.checkout_not_found(id)
    }
}

pub fn create_wording(kind: LibraryKind) -> Box<dyn Wording> {
    match kind {
        LibraryKind::Standard => Box::new(StandardWording),
        LibraryKind::Special => Box::new(SpecialWording::new("Special Library")),
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::wording::create_wording;
    use crate::core::library::LibraryKind;

    #[test]
    fn test_should_word_standard_notices() {
        let wording = create_wording(LibraryKind::Standard);
        assert_eq!("Book Book 1 checked out successfully", wording.checked_out("Book 1"));
        assert_eq!("Book Book 1 is not available", wording.not_available("Book 1"));
        assert_eq!("Book with ID B9 not found", wording.checkout_not_found("B9"));
        assert_eq!("Book Book 1 returned successfully", wording.returned("Book 1"));
        assert_eq!("Book Book 1 is already available", wording.already_available("Book 1"));
        assert_eq!("Book with ID B9 not found", wording.return_not_found("B9"));
    }

    #[test]
    fn test_should_word_special_notices() {
        let wording = create_wording(LibraryKind::Special);
        assert_eq!("Book Book 1 checked out successfully from Special Library", wording.checked_out("Book 1"));
        assert_eq!("Book Book 1 is not available in Special Library", wording.not_available("Book 1"));
        assert_eq!("Book with ID B9 not found in Special Library", wording.checkout_not_found("B9"));
        assert_eq!("Book Book 1 returned successfully to Special Library", wording.returned("Book 1"));
        assert_eq!("Book Book 1 is already available in Special Library", wording.already_available("Book 1"));
        assert_eq!("Book with ID B9 not found in Special Library", wording.return_not_found("B9"));
    }
}
