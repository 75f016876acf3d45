use crate::domain::entities::ChangeRequest;
use async_trait::async_trait;

/// スケジュール単位のオープン変更リクエスト検索用キャッシュポート
///
/// The cached value is the lookup result itself, so "no open request" is a
/// cacheable answer (`Some(None)`). Every mutation that touches a schedule
/// must invalidate its entry before the call returns.
#[async_trait]
pub trait OpenRequestCache: Send + Sync {
    /// キャッシュを検索（外側の None はキャッシュミス）
    async fn get(&self, schedule_id: &str) -> Option<Option<ChangeRequest>>;

    /// 検索結果をキャッシュに保存
    async fn set(&self, schedule_id: &str, request: Option<ChangeRequest>);

    /// スケジュールのエントリを無効化
    async fn invalidate(&self, schedule_id: &str);
}
