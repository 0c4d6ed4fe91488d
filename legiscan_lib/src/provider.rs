//! Seam between the research operations and the upstream data client.

use legiscan_api::types::{
    Bill, BillID, PeopleID, Person, RollCall, RollCallID, Session, SessionID, SponsoredBill,
};
use legiscan_api::{Client, Error};

/// The upstream fetch operations the research layer depends on.
///
/// Implemented by [`legiscan_api::Client`]; tests supply in-memory
/// implementations with per-item failure injection. Every call may fail
/// with a transport or upstream error; the research layer treats each
/// failure as opaque and carries forward only its display string.
#[allow(async_fn_in_trait)]
pub trait LegislativeDataProvider {
    /// Fetches the full session list for a state.
    async fn session_list(&self, state: &str) -> Result<Vec<Session>, Error>;

    /// Fetches a single bill with sponsors and vote references.
    async fn bill(&self, bill_id: BillID) -> Result<Bill, Error>;

    /// Fetches a single roll call with its individual votes.
    async fn roll_call(&self, roll_call_id: RollCallID) -> Result<RollCall, Error>;

    /// Fetches a single legislator record.
    async fn person(&self, people_id: PeopleID) -> Result<Person, Error>;

    /// Fetches the roster of legislators active in a session.
    async fn session_people(&self, session_id: SessionID) -> Result<Vec<Person>, Error>;

    /// Fetches the summaries of every bill a legislator has sponsored.
    async fn sponsored_list(&self, people_id: PeopleID) -> Result<Vec<SponsoredBill>, Error>;
}

impl LegislativeDataProvider for Client {
    async fn session_list(&self, state: &str) -> Result<Vec<Session>, Error> {
        self.get_session_list(state).await
    }

    async fn bill(&self, bill_id: BillID) -> Result<Bill, Error> {
        self.get_bill(bill_id).await
    }

    async fn roll_call(&self, roll_call_id: RollCallID) -> Result<RollCall, Error> {
        self.get_roll_call(roll_call_id).await
    }

    async fn person(&self, people_id: PeopleID) -> Result<Person, Error> {
        self.get_person(people_id).await
    }

    async fn session_people(&self, session_id: SessionID) -> Result<Vec<Person>, Error> {
        self.get_session_people(session_id).await
    }

    async fn sponsored_list(&self, people_id: PeopleID) -> Result<Vec<SponsoredBill>, Error> {
        self.get_sponsored_list(people_id).await
    }
}
