use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, SubscriptionOutcome};
use crate::core::command::{Command, CommandError};

pub struct ApplySubscriptionCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl ApplySubscriptionCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplySubscriptionCommandRequest {
    pub book_id: String,
}

impl ApplySubscriptionCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplySubscriptionCommandResponse {
    #[serde(flatten)]
    pub result: SubscriptionOutcome,
}

impl ApplySubscriptionCommandResponse {
    pub fn new(result: SubscriptionOutcome) -> Self {
        Self {
            result,
        }
    }
}

impl Command<ApplySubscriptionCommandRequest, ApplySubscriptionCommandResponse> for ApplySubscriptionCommand {
    fn execute(&self, req: ApplySubscriptionCommandRequest) -> Result<ApplySubscriptionCommandResponse, CommandError> {
        self.catalog_service.apply_for_subscription(req.book_id.as_str())
            .map_err(CommandError::from).map(ApplySubscriptionCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::apply_subscription_cmd::{ApplySubscriptionCommand, ApplySubscriptionCommandRequest};
    use crate::catalog::domain::{CatalogService, SubscriptionOutcome};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryKind;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_apply_subscription() {
        let svc: Rc<dyn CatalogService> = Rc::from(factory::create_catalog_service(
            &Configuration::new("test"), LibraryKind::Standard, GatewayPublisherVia::Memory));
        svc.add_book(BookEntity::comic("Comic Book 1", "CB001", "Author 2", 15.0, "Comic", true).into_shared())
            .expect("should add book");
        svc.add_book(BookEntity::new("Book 1", "B001", "Author 1", 10.0, "History").into_shared())
            .expect("should add book");
        let cmd = ApplySubscriptionCommand::new(svc);

        let res = cmd.execute(ApplySubscriptionCommandRequest::new("CB001")).expect("should apply");
        assert!(matches!(res.result, SubscriptionOutcome::Applied { .. }));

        let res = cmd.execute(ApplySubscriptionCommandRequest::new("B001"));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
