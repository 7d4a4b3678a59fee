//! resincalc MCP Server Implementation
//!
//! Implements the MCP server with all mixing calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::models::{DilutionInput, RatioInput};
use crate::tools::dilution;
use crate::tools::ratio;
use crate::tools::reference;
use crate::tools::status::{Calculation, StatusTracker};

/// resincalc MCP Service
#[derive(Clone)]
pub struct ResinCalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<ResinCalcService>,
}

impl ResinCalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for ResinCalcService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Ratio Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RatioCheckParams {
    /// Number of carts to fill (default 43, min 1)
    #[serde(default = "default_cart_count")]
    pub cart_count: u32,
    /// Grams per cart (default 4.0, min 0.1)
    #[serde(default = "default_grams_per_cart")]
    pub grams_per_cart: f64,
    /// Number of strains the batch is split across (default 5, min 1)
    #[serde(default = "default_strain_count")]
    pub strain_count: u32,
    /// Distillate percentage, 0-100 (default 60)
    #[serde(default = "default_distillate_pct")]
    pub distillate_pct: u32,
    /// Live resin percentage, 0-100 (default 35)
    #[serde(default = "default_resin_pct")]
    pub resin_pct: u32,
    /// Terpene percentage, 0-100 (default 5)
    #[serde(default = "default_terp_pct")]
    pub terp_pct: u32,
}

fn default_cart_count() -> u32 { RatioInput::default().cart_count }
fn default_grams_per_cart() -> f64 { RatioInput::default().grams_per_cart }
fn default_strain_count() -> u32 { RatioInput::default().strain_count }
fn default_distillate_pct() -> u32 { RatioInput::default().distillate_pct }
fn default_resin_pct() -> u32 { RatioInput::default().resin_pct }
fn default_terp_pct() -> u32 { RatioInput::default().terp_pct }

impl From<RatioCheckParams> for RatioInput {
    fn from(p: RatioCheckParams) -> Self {
        RatioInput {
            cart_count: p.cart_count,
            grams_per_cart: p.grams_per_cart,
            strain_count: p.strain_count,
            distillate_pct: p.distillate_pct,
            resin_pct: p.resin_pct,
            terp_pct: p.terp_pct,
        }
    }
}

// ============================================================================
// Dilution Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DilutionCalcParams {
    /// THC percentage of the live resin, 0-100 (default 60.0)
    #[serde(default = "default_thc_pct")]
    pub thc_pct: f64,
    /// Terp sauce / waxes / lipids percentage of the live resin, 0-100 (default 40.0)
    #[serde(default = "default_filler_pct")]
    pub filler_pct: f64,
    /// Live resin used in the batch, percent 0-100 (default 35)
    #[serde(default = "default_resin_used_pct")]
    pub resin_used_pct: u32,
    /// Total batch mass in grams (default 172.0, min 0.1)
    #[serde(default = "default_batch_mass")]
    pub batch_mass: f64,
    /// Extra terpenes added to the batch, percent 0-20 (default 5)
    #[serde(default = "default_extra_terp_pct")]
    pub extra_terp_pct: u32,
}

fn default_thc_pct() -> f64 { DilutionInput::default().thc_pct }
fn default_filler_pct() -> f64 { DilutionInput::default().filler_pct }
fn default_resin_used_pct() -> u32 { DilutionInput::default().resin_used_pct }
fn default_batch_mass() -> f64 { DilutionInput::default().batch_mass }
fn default_extra_terp_pct() -> u32 { DilutionInput::default().extra_terp_pct }

impl From<DilutionCalcParams> for DilutionInput {
    fn from(p: DilutionCalcParams) -> Self {
        DilutionInput {
            thc_pct: p.thc_pct,
            filler_pct: p.filler_pct,
            resin_used_pct: p.resin_used_pct,
            batch_mass: p.batch_mass,
            extra_terp_pct: p.extra_terp_pct,
        }
    }
}

// ============================================================================
// Reference Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TerpeneInfoParams {
    /// Terpene name to look up (optional, case-insensitive). Omit for the full table.
    pub name: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ResinCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the resincalc service including build info, process information, and calculation counters")]
    async fn calc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for formulating cartridge batches. Call this when starting a mixing session or when unsure how to use the calculator tools.")]
    fn mixing_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MIXING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MIXING_INSTRUCTIONS)]))
    }

    // --- Calculators ---

    #[tool(description = "Ratio checker: split a batch of carts into distillate, live resin and terpene masses, in total and per strain. The three percentages must total exactly 100; otherwise returns how much to add or remove.")]
    async fn ratio_check(&self, Parameters(p): Parameters<RatioCheckParams>) -> Result<CallToolResult, McpError> {
        let result = ratio::check_ratio(p.into());
        self.status_tracker.lock().await.record(Calculation::Ratio, result.is_err());
        let json = match result {
            Ok(report) => serde_json::to_string_pretty(&report),
            Err(blocked) => serde_json::to_string_pretty(&blocked),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Dilution calculator: estimate how much of the final mix is non-THC resin filler (terp sauce, waxes, lipids) and the total terpene content after adding extra terpenes. THC% + filler% may not exceed 100.")]
    async fn dilution_calc(&self, Parameters(p): Parameters<DilutionCalcParams>) -> Result<CallToolResult, McpError> {
        let result = dilution::calculate_dilution(p.into());
        self.status_tracker.lock().await.record(Calculation::Dilution, result.is_err());
        let json = match result {
            Ok(report) => serde_json::to_string_pretty(&report),
            Err(blocked) => serde_json::to_string_pretty(&blocked),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Reference ---

    #[tool(description = "Terpene reference: effects, prominent strains, harshness, vape temperature and boiling point for common cannabis terpenes. Pass a name for a single terpene.")]
    fn terpene_info(&self, Parameters(p): Parameters<TerpeneInfoParams>) -> Result<CallToolResult, McpError> {
        let json = match reference::terpene_info(p.name.as_deref()) {
            Ok(info) => serde_json::to_string_pretty(&info),
            Err(missing) => serde_json::to_string_pretty(&missing),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Show credits for the calculator")]
    fn credits(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(reference::CREDITS)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ResinCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "resincalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Live Resin Mixing Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Live Resin Mixing Calculator - cartridge ratio and dilution formulation. \
                 IMPORTANT: Call mixing_instructions before the first calculation. \
                 Calculators: ratio_check (distillate/resin/terpene split, must total 100%), \
                 dilution_calc (resin filler dilution and final terpene %). \
                 Reference: terpene_info, credits. \
                 Status: calc_status."
                    .into(),
            ),
        }
    }
}
