//! Governance chain module client.

use std::sync::Arc;

use crate::{
	models::{
		chain::{
			GovernanceModuleParamsResponse, ProposalDepositsResponse, ProposalResponse,
			ProposalTallyResponse, ProposalVotesResponse, ProposalsResponse,
		},
		PageRequest,
	},
	services::client::transports::{decode, GatewayTransport, TransportError},
};

pub struct GovClient {
	transport: Arc<dyn GatewayTransport>,
}

impl GovClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport }
	}

	pub async fn fetch_module_params(
		&self,
	) -> Result<GovernanceModuleParamsResponse, TransportError> {
		let payload = self
			.transport
			.send_get("/cosmos/gov/v1/params/voting", &[])
			.await?;
		decode(payload)
	}

	pub async fn fetch_proposals(
		&self,
		proposal_status: Option<&str>,
		pagination: Option<&PageRequest>,
	) -> Result<ProposalsResponse, TransportError> {
		let mut query = pagination.map(PageRequest::to_query).unwrap_or_default();
		if let Some(status) = proposal_status {
			query.push(("proposal_status".to_string(), status.to_string()));
		}
		let payload = self
			.transport
			.send_get("/cosmos/gov/v1/proposals", &query)
			.await?;
		decode(payload)
	}

	pub async fn fetch_proposal(
		&self,
		proposal_id: u64,
	) -> Result<ProposalResponse, TransportError> {
		let path = format!("/cosmos/gov/v1/proposals/{}", proposal_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}

	pub async fn fetch_proposal_deposits(
		&self,
		proposal_id: u64,
		pagination: Option<&PageRequest>,
	) -> Result<ProposalDepositsResponse, TransportError> {
		let path = format!("/cosmos/gov/v1/proposals/{}/deposits", proposal_id);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_proposal_votes(
		&self,
		proposal_id: u64,
		pagination: Option<&PageRequest>,
	) -> Result<ProposalVotesResponse, TransportError> {
		let path = format!("/cosmos/gov/v1/proposals/{}/votes", proposal_id);
		let query = pagination.map(PageRequest::to_query).unwrap_or_default();
		let payload = self.transport.send_get(&path, &query).await?;
		decode(payload)
	}

	pub async fn fetch_proposal_tally(
		&self,
		proposal_id: u64,
	) -> Result<ProposalTallyResponse, TransportError> {
		let path = format!("/cosmos/gov/v1/proposals/{}/tally", proposal_id);
		let payload = self.transport.send_get(&path, &[]).await?;
		decode(payload)
	}
}
