//! 侧栏面板API客户端
//!
//! 信息流周边的行情与顾问面板数据源:
//! - 本地顾问服务: 城市金价、邮政储蓄方案、文档分析、投资建议
//! - 公开行情API: 社区热议趋势 (RapidAPI,密钥可选)
//!
//! 面板是尽力而为的外围能力: 任何一个端点失败只影响对应面板,
//! 信息流核心不感知这里的错误。

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::errors::ApiError;
use crate::models::PanelConfig;

/// 行情趋势API主机
const RAPIDAPI_HOST: &str = "twitter-api45.p.rapidapi.com";

/// 行情趋势API地址
const TRENDS_URL: &str = "https://twitter-api45.p.rapidapi.com/trends.php";

/// 常规请求超时
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// 文档分析上传超时 (服务端OCR与模型推理耗时较长)
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// 城市金价条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldRate {
    pub city: String,
    pub gold_22k: String,
    pub gold_24k: String,
}

/// 邮政储蓄方案条目
///
/// 字段使用camelCase以对齐TypeScript端。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsScheme {
    pub title: String,
    pub description: String,
    pub interest_rate: String,
    pub min_investment: String,
    pub tenure: String,
    pub link: String,
}

/// 社区热议趋势条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialTrend {
    pub name: String,
    pub url: String,
    /// 讨论量,部分趋势无统计
    pub tweet_volume: Option<u64>,
}

/// 行情趋势API响应
#[derive(Debug, Deserialize)]
struct TrendsResponse {
    #[serde(default)]
    trends: Vec<SocialTrend>,
}

/// 投资建议请求
///
/// 字段名与顾问服务的JSON契约一致 (snake_case)。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentAdviceRequest {
    pub age: u32,
    pub horizon: String,
    pub period: u32,
    pub investment_type: String,
    pub amount: f64,
}

/// 投资建议响应
#[derive(Debug, Deserialize)]
struct InvestmentAdviceResponse {
    #[serde(default)]
    recommended_investments: Vec<String>,
}

/// 服务端业务错误载荷
#[derive(Debug, Deserialize)]
struct ServerErrorResponse {
    error: String,
}

/// 文档分析上传响应
///
/// 错误载荷在状态探测阶段已被拦截,这里只关心analysis字段。
#[derive(Debug, Deserialize)]
struct UploadResponse {
    analysis: Option<serde_json::Value>,
}

/// 结构化文档分析
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredAnalysis {
    pub document_type: String,
    pub explanation: String,
    #[serde(default)]
    pub key_details: Vec<String>,
    #[serde(default)]
    pub calculations: Vec<String>,
    #[serde(default)]
    pub insights: String,
}

/// 文档分析结果
///
/// 服务端的analysis字段既可能是约定结构的JSON,
/// 也可能是模型输出的纯文本,客户端统一归一化。
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DocumentAnalysis {
    Structured(StructuredAnalysis),
    Text(String),
}

/// 归一化analysis字段
///
/// 字符串载荷先尝试按约定结构解析(服务端把JSON文本塞进字符串的情况),
/// 解析不动则原样作为纯文本透传;对象载荷直接按约定结构解析。
fn normalize_analysis(value: serde_json::Value) -> DocumentAnalysis {
    match value {
        serde_json::Value::String(text) => {
            match serde_json::from_str::<StructuredAnalysis>(&text) {
                Ok(structured) => DocumentAnalysis::Structured(structured),
                Err(_) => DocumentAnalysis::Text(text),
            }
        }
        other => match serde_json::from_value::<StructuredAnalysis>(other.clone()) {
            Ok(structured) => DocumentAnalysis::Structured(structured),
            Err(_) => DocumentAnalysis::Text(other.to_string()),
        },
    }
}

/// 面板API客户端
///
/// 职责:
/// - 持有配置与复用的HTTP连接池
/// - 每个面板端点一个方法,错误映射为结构化 ApiError
pub struct PanelApiClient {
    config: PanelConfig,
    client: reqwest::Client,
}

impl PanelApiClient {
    /// 创建新的客户端
    ///
    /// # 参数
    /// - `config`: 面板配置 (顾问服务地址与可选趋势密钥)
    pub fn new(config: PanelConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::NetworkFailed(format!("HTTP客户端初始化失败: {}", e)))?;

        tracing::info!(
            config = %config.summary_for_logging(),
            "Panel API client initialized"
        );

        Ok(Self { config, client })
    }

    /// 获取城市金价表
    ///
    /// # 返回值
    /// 按城市排列的22K/24K金价条目,服务端抓取失败时可能为空列表
    ///
    /// # 错误
    /// - `ApiError::NetworkFailed`: 顾问服务不可达
    /// - `ApiError::HttpStatusError`: 非200响应
    /// - `ApiError::JsonParseFailed`: 响应解析失败
    pub async fn fetch_gold_rates(&self) -> Result<Vec<GoldRate>, ApiError> {
        let url = self.config.endpoint("get_gold_rates");
        tracing::debug!(url = %url, "Fetching gold rates");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let rates: Vec<GoldRate> = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse gold rates response");
            ApiError::JsonParseFailed(e.to_string())
        })?;

        tracing::info!(count = rates.len(), "Gold rates fetched");
        Ok(rates)
    }

    /// 获取邮政储蓄方案
    ///
    /// # 返回值
    /// 分类名 -> 方案列表 的映射
    ///
    /// # 错误
    /// - `ApiError::ServerRejected`: 服务端返回业务错误载荷
    /// - `ApiError::JsonParseFailed`: 响应解析失败
    pub async fn fetch_savings_schemes(
        &self,
    ) -> Result<HashMap<String, Vec<SavingsScheme>>, ApiError> {
        let url = self.config.endpoint("post_office_policies");
        tracing::debug!(url = %url, "Fetching savings schemes");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        // 上游抓取失败时服务端以200返回 {"error": ...},先探测再解析
        let body: serde_json::Value = response.json().await?;
        if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
            tracing::warn!(error = %error, "Savings schemes endpoint returned error payload");
            return Err(ApiError::ServerRejected(error.to_string()));
        }

        let schemes: HashMap<String, Vec<SavingsScheme>> =
            serde_json::from_value(body).map_err(|e| {
                tracing::error!(error = %e, "Failed to parse savings schemes response");
                ApiError::JsonParseFailed(e.to_string())
            })?;

        tracing::info!(categories = schemes.len(), "Savings schemes fetched");
        Ok(schemes)
    }

    /// 获取社区热议趋势
    ///
    /// 调用公开行情API,密钥来自配置。
    ///
    /// # 返回值
    /// 趋势条目列表 (名称、链接、讨论量)
    ///
    /// # 错误
    /// - `ApiError::MissingApiKey`: 未配置密钥,趋势面板保持禁用
    /// - `ApiError::HttpStatusError`: 配额耗尽或密钥无效等非200响应
    pub async fn fetch_social_trends(&self) -> Result<Vec<SocialTrend>, ApiError> {
        let api_key = self.config.rapidapi_key.as_ref().ok_or_else(|| {
            ApiError::MissingApiKey("行情趋势密钥未配置".to_string())
        })?;

        tracing::debug!(host = RAPIDAPI_HOST, "Fetching social trends");

        let response = self
            .client
            .get(TRENDS_URL)
            .query(&[("country", "UnitedStates")])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Trends API returned non-success");
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let trends: TrendsResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse trends response");
            ApiError::JsonParseFailed(e.to_string())
        })?;

        tracing::info!(count = trends.trends.len(), "Social trends fetched");
        Ok(trends.trends)
    }

    /// 上传并分析财务文档
    ///
    /// multipart上传,字段名 `file`。服务端对文档做OCR与模型分析,
    /// 返回结构化JSON或纯文本,客户端统一归一化。
    ///
    /// # 参数
    /// - `file_name`: 原始文件名 (服务端按扩展名路由处理器)
    /// - `bytes`: 文件内容
    ///
    /// # 错误
    /// - `ApiError::ServerRejected`: 不支持的文件类型、空文档等业务拒绝
    /// - `ApiError::InvalidResponse`: 响应缺少analysis字段
    pub async fn analyze_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentAnalysis, ApiError> {
        let url = self.config.endpoint("upload_file");
        tracing::debug!(
            url = %url,
            file_name = %file_name,
            size = bytes.len(),
            "Uploading document for analysis"
        );

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .timeout(UPLOAD_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // 业务拒绝走400,载荷里带error字段
        if let Ok(err_response) = serde_json::from_str::<ServerErrorResponse>(&body) {
            tracing::warn!(error = %err_response.error, "Document analysis rejected");
            return Err(ApiError::ServerRejected(err_response.error));
        }

        if !status.is_success() {
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let upload: UploadResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse analysis response");
            ApiError::JsonParseFailed(e.to_string())
        })?;

        let analysis = upload.analysis.ok_or_else(|| {
            ApiError::InvalidResponse("响应缺少analysis字段".to_string())
        })?;

        tracing::info!(file_name = %file_name, "Document analysis completed");
        Ok(normalize_analysis(analysis))
    }

    /// 获取投资建议
    ///
    /// # 参数
    /// - `request`: 年龄、期限类型、期限年数、投入方式与金额
    ///
    /// # 返回值
    /// 推荐投资品名称列表
    ///
    /// # 错误
    /// - `ApiError::ServerRejected`: 字段缺失等业务拒绝
    pub async fn fetch_investment_advice(
        &self,
        request: &InvestmentAdviceRequest,
    ) -> Result<Vec<String>, ApiError> {
        let url = self.config.endpoint("get_investment_options");
        tracing::debug!(url = %url, "Fetching investment advice");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(err_response) = serde_json::from_str::<ServerErrorResponse>(&body) {
                return Err(ApiError::ServerRejected(err_response.error));
            }
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let advice: InvestmentAdviceResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse investment advice response");
            ApiError::JsonParseFailed(e.to_string())
        })?;

        tracing::info!(
            count = advice.recommended_investments.len(),
            "Investment advice fetched"
        );
        Ok(advice.recommended_investments)
    }
}
