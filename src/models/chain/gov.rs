//! Governance module payloads.

use serde::{Deserialize, Serialize};

use crate::models::core::{Coin, PageResponse};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernanceParams {
	#[serde(default)]
	pub min_deposit: Vec<Coin>,
	#[serde(default)]
	pub max_deposit_period: String,
	#[serde(default)]
	pub voting_period: String,
	#[serde(default)]
	pub quorum: String,
	#[serde(default)]
	pub threshold: String,
	#[serde(default)]
	pub veto_threshold: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernanceModuleParamsResponse {
	#[serde(default)]
	pub params: GovernanceParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TallyResult {
	#[serde(default)]
	pub yes_count: String,
	#[serde(default)]
	pub abstain_count: String,
	#[serde(default)]
	pub no_count: String,
	#[serde(default)]
	pub no_with_veto_count: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub messages: Vec<serde_json::Value>,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub final_tally_result: Option<TallyResult>,
	#[serde(default)]
	pub submit_time: String,
	#[serde(default)]
	pub deposit_end_time: String,
	#[serde(default)]
	pub total_deposit: Vec<Coin>,
	#[serde(default)]
	pub voting_start_time: Option<String>,
	#[serde(default)]
	pub voting_end_time: Option<String>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub summary: String,
	#[serde(default)]
	pub proposer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalsResponse {
	#[serde(default)]
	pub proposals: Vec<Proposal>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalResponse {
	#[serde(default)]
	pub proposal: Proposal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalDeposit {
	#[serde(default)]
	pub proposal_id: String,
	#[serde(default)]
	pub depositor: String,
	#[serde(default)]
	pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalDepositsResponse {
	#[serde(default)]
	pub deposits: Vec<ProposalDeposit>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedVoteOption {
	#[serde(default)]
	pub option: String,
	#[serde(default)]
	pub weight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalVote {
	#[serde(default)]
	pub proposal_id: String,
	#[serde(default)]
	pub voter: String,
	#[serde(default)]
	pub options: Vec<WeightedVoteOption>,
	#[serde(default)]
	pub metadata: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalVotesResponse {
	#[serde(default)]
	pub votes: Vec<ProposalVote>,
	#[serde(default)]
	pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalTallyResponse {
	#[serde(default)]
	pub tally: TallyResult,
}
