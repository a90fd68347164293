// ABOUTME: Daily wellness tools - steps, summary, heart rate, sleep, stress, Body Battery, HRV
// ABOUTME: All take a calendar date (or range) and forward to one wellness endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::tools;
use crate::errors::AppResult;
use crate::garmin::GarminApi;
use crate::mcp::schema::{JsonSchema, PropertySchema, ToolSchema};
use crate::tools::params;
use crate::tools::registry::{McpTool, ToolRegistry};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Register the wellness tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GetSteps));
    registry.register(Arc::new(GetDailySummary));
    registry.register(Arc::new(GetHeartRate));
    registry.register(Arc::new(GetSleep));
    registry.register(Arc::new(GetStress));
    registry.register(Arc::new(GetBodyBattery));
    registry.register(Arc::new(GetHrv));
}

/// Schema for tools taking a single required `date`
fn single_date_schema(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "date".to_owned(),
        PropertySchema::string("Calendar date, YYYY-MM-DD"),
    );

    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec!["date".to_owned()]),
        },
    }
}

/// Schema for tools taking a required `start_date`/`end_date` pair
fn date_range_schema(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "start_date".to_owned(),
        PropertySchema::string("Range start, YYYY-MM-DD"),
    );
    properties.insert(
        "end_date".to_owned(),
        PropertySchema::string("Range end, YYYY-MM-DD"),
    );

    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec!["start_date".to_owned(), "end_date".to_owned()]),
        },
    }
}

struct GetSteps;

#[async_trait]
impl McpTool for GetSteps {
    fn name(&self) -> &'static str {
        tools::GET_STEPS
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(self.name(), "Get the step series for a day")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_steps(date).await
    }
}

struct GetDailySummary;

#[async_trait]
impl McpTool for GetDailySummary {
    fn name(&self) -> &'static str {
        tools::GET_DAILY_SUMMARY
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(
            self.name(),
            "Get the daily wellness summary (steps, calories, stress, heart rate)",
        )
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_daily_summary(date).await
    }
}

struct GetHeartRate;

#[async_trait]
impl McpTool for GetHeartRate {
    fn name(&self) -> &'static str {
        tools::GET_HEART_RATE
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(self.name(), "Get the heart rate series for a day")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_heart_rate(date).await
    }
}

struct GetSleep;

#[async_trait]
impl McpTool for GetSleep {
    fn name(&self) -> &'static str {
        tools::GET_SLEEP
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(self.name(), "Get sleep stages and scores for a night")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_sleep(date).await
    }
}

struct GetStress;

#[async_trait]
impl McpTool for GetStress {
    fn name(&self) -> &'static str {
        tools::GET_STRESS
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(self.name(), "Get the stress level series for a day")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_stress(date).await
    }
}

struct GetBodyBattery;

#[async_trait]
impl McpTool for GetBodyBattery {
    fn name(&self) -> &'static str {
        tools::GET_BODY_BATTERY
    }

    fn schema(&self) -> ToolSchema {
        date_range_schema(self.name(), "Get Body Battery reports for a date range")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let (start, end) = params::date_range(args)?;
        api.get_body_battery(start, end).await
    }
}

struct GetHrv;

#[async_trait]
impl McpTool for GetHrv {
    fn name(&self) -> &'static str {
        tools::GET_HRV
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(self.name(), "Get the heart-rate variability summary for a day")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_hrv(date).await
    }
}
