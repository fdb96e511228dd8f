use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    imaging::ports::ScratchFileStore,
    llm::ports::LLMClient,
    planner::{
        entities::{PlanBundle, QaPair},
        ports::PlannerService,
        prompts::{
            answer_or_fallback, assemble_plans, build_dietary_prompt, build_fitness_prompt,
            build_followup_prompt,
        },
        value_objects::{AskQuestionInput, GeneratePlansInput},
    },
    session::ports::SessionRepository,
};

impl<S, LLM, SF> PlannerService for Service<S, LLM, SF>
where
    S: SessionRepository,
    LLM: LLMClient,
    SF: ScratchFileStore,
{
    #[instrument(skip(self, input), fields(session_id = %input.session_id))]
    async fn generate_plans(&self, input: GeneratePlansInput) -> Result<PlanBundle, CoreError> {
        let session = self.load_session(input.session_id).await?;
        let credential = self.resolve_credential(&session)?;

        let meal_plan = self
            .llm_client
            .generate_with_text(credential.clone(), build_dietary_prompt(&input.profile))
            .await?;

        let routine = self
            .llm_client
            .generate_with_text(credential, build_fitness_prompt(&input.profile))
            .await?;

        // Nothing is stored unless both calls succeeded
        let plans = assemble_plans(meal_plan, routine);
        self.session_repository
            .replace_plans(input.session_id, plans.clone())
            .await?;

        info!("Plans generated");
        Ok(plans)
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id))]
    async fn ask_question(&self, input: AskQuestionInput) -> Result<QaPair, CoreError> {
        let session = self.load_session(input.session_id).await?;
        let credential = self.resolve_credential(&session)?;

        let question = input.question.trim().to_string();
        if question.is_empty() {
            return Err(CoreError::InvalidInput("Question cannot be empty".to_string()));
        }

        let plans = session.plans().ok_or(CoreError::PlansNotGenerated)?;
        let plans_generated_at = plans.generated_at;
        let prompt = build_followup_prompt(plans, &question);

        let answer = self
            .llm_client
            .generate_with_text(credential, prompt)
            .await?;

        let pair = QaPair::new(question, answer_or_fallback(answer));
        self.session_repository
            .append_qa_pair(input.session_id, pair.clone(), plans_generated_at)
            .await?;

        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use tempfile::TempDir;
    use uuid::Uuid;

    use super::*;
    use crate::{
        domain::{
            llm::{ports::MockLLMClient, value_objects::ApiCredential},
            planner::{
                entities::{ActivityLevel, DietaryPreference, FitnessGoal, Sex, UserProfile},
                prompts::{ANSWER_FALLBACK, assemble_plans},
            },
            session::{entities::Session, ports::SessionRepository},
        },
        infrastructure::{scratch::FsScratchFileStore, session::InMemorySessionRepository},
    };

    type TestService = Service<InMemorySessionRepository, MockLLMClient, FsScratchFileStore>;

    fn profile() -> UserProfile {
        UserProfile {
            age: 42,
            height_cm: 165.0,
            weight_kg: 68.2,
            sex: Sex::Other,
            activity_level: ActivityLevel::Sedentary,
            dietary_preference: DietaryPreference::Vegetarian,
            fitness_goal: FitnessGoal::LoseWeight,
        }
    }

    async fn service_with(
        llm: MockLLMClient,
        session_key: Option<&str>,
        default_key: Option<&str>,
    ) -> (TestService, Uuid, TempDir) {
        let scratch = TempDir::new().unwrap();
        let repository = InMemorySessionRepository::new();
        let session = repository.create(Session::new()).await.unwrap();
        if let Some(key) = session_key {
            repository
                .set_credential(session.id, Some(ApiCredential::parse(key).unwrap()))
                .await
                .unwrap();
        }

        let service = Service::new(
            repository,
            llm,
            FsScratchFileStore::new(scratch.path().to_path_buf()),
            default_key.map(|k| ApiCredential::parse(k).unwrap()),
            "gemini-test".to_string(),
        );

        (service, session.id, scratch)
    }

    fn expect_plans(llm: &mut MockLLMClient, meal_plan: &'static str, routine: &'static str) {
        let mut seq = Sequence::new();
        llm.expect_generate_with_text()
            .withf(|_, prompt| prompt.starts_with("Create a personalized dietary plan"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Box::pin(async move { Ok(Some(meal_plan.to_string())) }));
        llm.expect_generate_with_text()
            .withf(|_, prompt| prompt.starts_with("Create a personalized fitness plan"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Box::pin(async move { Ok(Some(routine.to_string())) }));
    }

    #[tokio::test]
    async fn test_generate_without_credential_makes_no_call() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let (service, session_id, _scratch) = service_with(llm, None, None).await;
        let result = service
            .generate_plans(GeneratePlansInput {
                session_id,
                profile: profile(),
            })
            .await;

        assert_eq!(result, Err(CoreError::MissingCredential));
        let session = service.load_session(session_id).await.unwrap();
        assert!(!session.plans_generated());
    }

    #[tokio::test]
    async fn test_configured_key_is_used_when_session_has_none() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|credential, _| credential.expose() == "server-key")
            .times(2)
            .returning(|_, _| Box::pin(async { Ok(Some("text".to_string())) }));

        let (service, session_id, _scratch) = service_with(llm, None, Some("server-key")).await;
        let plans = service
            .generate_plans(GeneratePlansInput {
                session_id,
                profile: profile(),
            })
            .await
            .unwrap();

        assert_eq!(plans.dietary_plan.meal_plan, "text");
    }

    #[tokio::test]
    async fn test_generate_plans_stores_both_plans() {
        let mut llm = MockLLMClient::new();
        expect_plans(&mut llm, "Breakfast: oats", "Monday: squats");

        let (service, session_id, _scratch) = service_with(llm, Some("k"), None).await;
        let plans = service
            .generate_plans(GeneratePlansInput {
                session_id,
                profile: profile(),
            })
            .await
            .unwrap();

        assert_eq!(plans.dietary_plan.meal_plan, "Breakfast: oats");
        assert_eq!(plans.fitness_plan.routine, "Monday: squats");

        let session = service.load_session(session_id).await.unwrap();
        assert!(session.plans_generated());
        assert_eq!(session.plans(), Some(&plans));
    }

    #[tokio::test]
    async fn test_regenerate_resets_history() {
        let mut llm = MockLLMClient::new();
        let mut seq = Sequence::new();
        for text in ["diet-1", "fit-1", "answer-1", "diet-2", "fit-2"] {
            llm.expect_generate_with_text()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _| Box::pin(async move { Ok(Some(text.to_string())) }));
        }

        let (service, session_id, _scratch) = service_with(llm, Some("k"), None).await;
        let input = GeneratePlansInput {
            session_id,
            profile: profile(),
        };

        service.generate_plans(input.clone()).await.unwrap();
        service
            .ask_question(AskQuestionInput {
                session_id,
                question: "Why oats?".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(service.load_session(session_id).await.unwrap().qa_pairs().len(), 1);

        service.generate_plans(input).await.unwrap();
        let session = service.load_session(session_id).await.unwrap();
        assert!(session.qa_pairs().is_empty());
        assert_eq!(session.plans().unwrap().dietary_plan.meal_plan, "diet-2");
    }

    #[tokio::test]
    async fn test_failed_fitness_call_leaves_session_unchanged() {
        let mut llm = MockLLMClient::new();
        let mut seq = Sequence::new();
        llm.expect_generate_with_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Box::pin(async { Ok(Some("diet".to_string())) }));
        llm.expect_generate_with_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Box::pin(async { Err(CoreError::InvalidCredential("bad".into())) }));

        let (service, session_id, _scratch) = service_with(llm, Some("k"), None).await;
        let result = service
            .generate_plans(GeneratePlansInput {
                session_id,
                profile: profile(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidCredential(_))));
        assert!(!service.load_session(session_id).await.unwrap().plans_generated());
    }

    #[tokio::test]
    async fn test_answers_append_one_pair_each() {
        let mut llm = MockLLMClient::new();
        expect_plans(&mut llm, "diet", "fitness");
        llm.expect_generate_with_text()
            .withf(|_, prompt| prompt.starts_with("Dietary Plan: diet\n\nFitness Plan: fitness"))
            .times(2)
            .returning(|_, prompt| {
                let question = prompt.rsplit("User Question: ").next().unwrap().to_string();
                Box::pin(async move { Ok(Some(format!("answer to {}", question))) })
            });

        let (service, session_id, _scratch) = service_with(llm, Some("k"), None).await;
        service
            .generate_plans(GeneratePlansInput {
                session_id,
                profile: profile(),
            })
            .await
            .unwrap();

        let first = service
            .ask_question(AskQuestionInput {
                session_id,
                question: "Can I skip lunch?".to_string(),
            })
            .await
            .unwrap();
        let before = service.load_session(session_id).await.unwrap().qa_pairs().to_vec();

        service
            .ask_question(AskQuestionInput {
                session_id,
                question: " Rest days? ".to_string(),
            })
            .await
            .unwrap();
        let after = service.load_session(session_id).await.unwrap().qa_pairs().to_vec();

        assert_eq!(before, vec![first]);
        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].question, "Rest days?");
        assert_eq!(after[1].answer, "answer to Rest days?");
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let mut llm = MockLLMClient::new();
        expect_plans(&mut llm, "diet", "fitness");

        let (service, session_id, _scratch) = service_with(llm, Some("k"), None).await;
        service
            .generate_plans(GeneratePlansInput {
                session_id,
                profile: profile(),
            })
            .await
            .unwrap();

        let result = service
            .ask_question(AskQuestionInput {
                session_id,
                question: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        assert!(service.load_session(session_id).await.unwrap().qa_pairs().is_empty());
    }

    #[tokio::test]
    async fn test_question_before_plans_is_rejected() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let (service, session_id, _scratch) = service_with(llm, Some("k"), None).await;
        let result = service
            .ask_question(AskQuestionInput {
                session_id,
                question: "Hello?".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::PlansNotGenerated));
    }

    #[tokio::test]
    async fn test_empty_answer_uses_fallback() {
        let mut llm = MockLLMClient::new();
        expect_plans(&mut llm, "diet", "fitness");
        llm.expect_generate_with_text()
            .withf(|_, prompt| prompt.starts_with("Dietary Plan:"))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let (service, session_id, _scratch) = service_with(llm, Some("k"), None).await;
        service
            .generate_plans(GeneratePlansInput {
                session_id,
                profile: profile(),
            })
            .await
            .unwrap();

        let pair = service
            .ask_question(AskQuestionInput {
                session_id,
                question: "Anything?".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(pair.answer, ANSWER_FALLBACK);
    }

    #[tokio::test]
    async fn test_answer_is_dropped_when_plans_are_regenerated_meanwhile() {
        let scratch = TempDir::new().unwrap();
        let repository = InMemorySessionRepository::new();
        let session = repository.create(Session::new()).await.unwrap();
        repository
            .set_credential(session.id, Some(ApiCredential::parse("k").unwrap()))
            .await
            .unwrap();
        repository
            .replace_plans(session.id, assemble_plans(Some("old".into()), Some("old".into())))
            .await
            .unwrap();

        let session_id = session.id;
        let concurrent = repository.clone();
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_, _| {
                let repository = concurrent.clone();
                Box::pin(async move {
                    let mut newer = assemble_plans(Some("new".into()), Some("new".into()));
                    newer.generated_at += chrono::Duration::seconds(1);
                    repository.replace_plans(session_id, newer).await?;
                    Ok(Some("answer for the old plans".to_string()))
                })
            });

        let service = Service::new(
            repository,
            llm,
            FsScratchFileStore::new(scratch.path().to_path_buf()),
            None,
            "gemini-test".to_string(),
        );

        let result = service
            .ask_question(AskQuestionInput {
                session_id,
                question: "Is this still valid?".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::PlansReplaced));
        let session = service.load_session(session_id).await.unwrap();
        assert_eq!(session.plans().unwrap().dietary_plan.meal_plan, "new");
        assert!(session.qa_pairs().is_empty());
    }
}
