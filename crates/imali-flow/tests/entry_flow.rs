//! End-to-end scenarios for the participant-entry flow: declaration,
//! form commits, blocking validation, and the persistence saga with
//! partial-failure retry.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use imali_core::{
    AccountId, CompanyFlags, EnterpriseKind, FileFormat, FileRef, IdentityDocument, PersonId, Role,
    SignatureCapture,
};
use imali_flow::{
    EntryFlow, FilerProfile, FlowError, FlowState, PersonDirectory, PersonDraft,
    PersonServiceError,
};
use imali_registry::{Participant, PersonName, ValidityEnd, ValidityPeriod};
use imali_validate::ViolationCode;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

fn file(name: &str) -> FileRef {
    FileRef {
        name: name.into(),
        format: FileFormat::Pdf,
        size_bytes: 80_000,
    }
}

fn profile() -> FilerProfile {
    FilerProfile {
        account_id: AccountId("acc-9".into()),
        person_id: Some(PersonId("p-filer".into())),
        name: PersonName {
            last: "TRAORE".into(),
            first: "Awa".into(),
        },
        birth_date: NaiveDate::from_ymd_opt(1988, 7, 2).unwrap(),
        birth_place: "Bamako".into(),
        nationality: "Malienne".into(),
        email: Some("awa@example.ml".into()),
        phone: None,
        civility: None,
        sex: None,
        marital_status: None,
        division_code: None,
    }
}

/// A fully documented participant, valid for the clean-record company
/// document rules.
fn participant(last: &str, role: Role, share: f64) -> Participant {
    let manager_docs = role == Role::Manager;
    Participant {
        person_id: None,
        name: PersonName {
            last: last.into(),
            first: "Test".into(),
        },
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        birth_place: "Bamako".into(),
        nationality: "Malienne".into(),
        role,
        share_percentage: share,
        validity: ValidityPeriod {
            start: today(),
            end: ValidityEnd::Open,
        },
        identity: IdentityDocument {
            kind: "PASSEPORT".into(),
            number: "B1234567".into(),
            file: Some(file("passport.pdf")),
        },
        marital_status: None,
        criminal_record: None,
        honor_declaration: manager_docs.then(|| file("declaration.pdf")),
        honor_signature: manager_docs.then(|| SignatureCapture::Drawn {
            data_url: "data:image/png;base64,AAAA".into(),
        }),
        marriage_certificate: None,
        birth_certificate: manager_docs.then(|| file("acte_naissance.pdf")),
    }
}

struct ScriptedDirectory {
    calls: Mutex<Vec<String>>,
    fail_at: Option<usize>,
}

impl ScriptedDirectory {
    fn healthy() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: None,
        }
    }

    fn failing_at(n: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: Some(n),
        }
    }
}

#[async_trait]
impl PersonDirectory for ScriptedDirectory {
    async fn create_person(&self, draft: &PersonDraft) -> Result<PersonId, PersonServiceError> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(draft.last_name.clone());
        if self.fail_at == Some(index) {
            return Err(PersonServiceError::Unavailable("connection reset".into()));
        }
        Ok(PersonId(format!("p-{index}")))
    }
}

/// Build a flow holding a complete, valid company draft: the filer as
/// manager plus an executive and an associate.
fn reviewed_company_flow() -> EntryFlow {
    let mut flow = EntryFlow::new(EnterpriseKind::Company, CompanyFlags::default());

    let key = flow
        .declare_filer_role(&profile(), Role::Manager, today())
        .unwrap();
    let mut filer = participant("TRAORE", Role::Manager, 10.0);
    filer.name.first = "Awa".into();
    flow.commit_participant(filer).unwrap();
    assert_eq!(flow.editing(), None);
    // The filer entry keeps the account's person id through the edit.
    assert_eq!(
        flow.registry().get(key).unwrap().person_id,
        Some(PersonId("p-filer".into()))
    );

    flow.begin_add().unwrap();
    flow.commit_participant(participant("KEITA", Role::Executive, 60.0))
        .unwrap();
    flow.begin_add().unwrap();
    flow.commit_participant(participant("CISSE", Role::Associate, 30.0))
        .unwrap();
    flow
}

#[test]
fn test_declaration_synthesizes_and_opens_edit() {
    let mut flow = EntryFlow::new(EnterpriseKind::Company, CompanyFlags::default());
    assert_eq!(flow.state(), FlowState::NoRoleDeclared);

    let key = flow
        .declare_filer_role(&profile(), Role::Executive, today())
        .unwrap();
    assert_eq!(flow.state(), FlowState::AddingParticipant);
    assert_eq!(flow.editing(), Some(key));
    assert_eq!(flow.registry().len(), 1);
    assert_eq!(flow.registry().get(key).unwrap().name.last, "TRAORE");
}

#[test]
fn test_individual_filer_cannot_declare_manager() {
    let mut flow = EntryFlow::new(EnterpriseKind::Individual, CompanyFlags::default());
    let err = flow
        .declare_filer_role(&profile(), Role::Manager, today())
        .unwrap_err();
    assert!(matches!(err, FlowError::RoleNotAvailable { .. }));
    assert_eq!(flow.state(), FlowState::NoRoleDeclared);

    let key = flow
        .declare_filer_role(&profile(), Role::Executive, today())
        .unwrap();
    assert_eq!(flow.registry().get(key).unwrap().share_percentage, 100.0);
}

#[test]
fn test_commit_gates_on_required_fields() {
    let mut flow = EntryFlow::new(EnterpriseKind::Company, CompanyFlags::default());
    flow.declare_filer_role(&profile(), Role::Manager, today())
        .unwrap();

    let mut incomplete = participant("TRAORE", Role::Manager, 10.0);
    incomplete.birth_place = "  ".into();
    let err = flow.commit_participant(incomplete).unwrap_err();
    match err {
        FlowError::MissingFields { fields } => assert_eq!(fields, vec!["birth place"]),
        other => panic!("expected MissingFields, got {other:?}"),
    }
    // Still on the form; the entry was not committed.
    assert_eq!(flow.state(), FlowState::AddingParticipant);
}

#[test]
fn test_cancelling_uncommitted_declaration_rolls_back() {
    let mut flow = EntryFlow::new(EnterpriseKind::Company, CompanyFlags::default());
    flow.declare_filer_role(&profile(), Role::Manager, today())
        .unwrap();
    flow.cancel_entry().unwrap();
    assert_eq!(flow.state(), FlowState::NoRoleDeclared);
    assert!(flow.registry().is_empty());
}

#[test]
fn test_cancelling_a_later_edit_keeps_the_entry() {
    let mut flow = reviewed_company_flow();
    let (key, _) = flow.registry().iter().next().unwrap();
    flow.begin_edit(key).unwrap();
    flow.cancel_entry().unwrap();
    assert_eq!(flow.state(), FlowState::ReviewingList);
    assert_eq!(flow.registry().len(), 3);
}

#[test]
fn test_removing_the_last_participant_undeclares() {
    let mut flow = EntryFlow::new(EnterpriseKind::Company, CompanyFlags::default());
    flow.declare_filer_role(&profile(), Role::Manager, today())
        .unwrap();
    let key = flow
        .commit_participant(participant("TRAORE", Role::Manager, 100.0))
        .unwrap();
    let removed = flow.remove_participant(key).unwrap();
    assert_eq!(removed.name.last, "TRAORE");
    assert_eq!(flow.state(), FlowState::NoRoleDeclared);
}

#[tokio::test]
async fn test_submit_blocks_on_violations_until_fixed() {
    let mut flow = EntryFlow::new(EnterpriseKind::Company, CompanyFlags::default());
    flow.declare_filer_role(&profile(), Role::Executive, today())
        .unwrap();
    let mut filer = participant("TRAORE", Role::Executive, 60.0);
    filer.person_id = Some(PersonId("p-filer".into()));
    flow.commit_participant(filer).unwrap();
    flow.begin_add().unwrap();
    flow.commit_participant(participant("CISSE", Role::Associate, 30.0))
        .unwrap();

    // No manager, shares at 90: blocked with both violations surfaced.
    let directory = ScriptedDirectory::healthy();
    let err = flow.submit(today(), &directory).await.unwrap_err();
    assert!(matches!(err, FlowError::ValidationBlocked { count: 2 }));
    assert_eq!(flow.state(), FlowState::Blocked);
    let codes: Vec<ViolationCode> = flow.violations().iter().map(|v| v.code).collect();
    assert_eq!(
        codes,
        vec![ViolationCode::ManagerCardinality, ViolationCode::ShareSum]
    );
    // Nothing was sent to the person service while blocked.
    assert_eq!(directory.calls.lock().unwrap().len(), 0);

    // Fix both problems from the blocked state and resubmit.
    flow.begin_add().unwrap();
    flow.commit_participant(participant("DIARRA", Role::Manager, 10.0))
        .unwrap();
    flow.submit(today(), &directory).await.unwrap();
    assert_eq!(flow.state(), FlowState::Accepted);
    assert!(flow.violations().is_empty());
}

#[tokio::test]
async fn test_accept_persists_only_unpersisted_participants() {
    let mut flow = reviewed_company_flow();
    let directory = ScriptedDirectory::healthy();
    flow.submit(today(), &directory).await.unwrap();

    // The filer already had a person id; only the other two are created.
    assert_eq!(*directory.calls.lock().unwrap(), vec!["KEITA", "CISSE"]);
    assert!(flow.registry().participants().all(|p| p.is_persisted()));
}

#[tokio::test]
async fn test_saga_failure_returns_to_review_and_retry_skips_persisted() {
    let mut flow = reviewed_company_flow();

    let flaky = ScriptedDirectory::failing_at(1);
    let err = flow.submit(today(), &flaky).await.unwrap_err();
    match err {
        FlowError::Persistence(e) => {
            assert!(e.to_string().contains("CISSE"));
        }
        other => panic!("expected Persistence, got {other:?}"),
    }
    assert_eq!(flow.state(), FlowState::ReviewingList);

    // KEITA went through before the failure and must not be re-created.
    let healthy = ScriptedDirectory::healthy();
    flow.submit(today(), &healthy).await.unwrap();
    assert_eq!(flow.state(), FlowState::Accepted);
    assert_eq!(*healthy.calls.lock().unwrap(), vec!["CISSE"]);
}

#[tokio::test]
async fn test_accepted_is_terminal() {
    let mut flow = reviewed_company_flow();
    let directory = ScriptedDirectory::healthy();
    flow.submit(today(), &directory).await.unwrap();

    let err = flow.submit(today(), &directory).await.unwrap_err();
    assert!(matches!(err, FlowError::InvalidTransition { .. }));
    assert!(flow.begin_add().is_err());
}
