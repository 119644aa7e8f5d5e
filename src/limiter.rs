use std::{
    collections::BTreeMap,
    sync::Mutex,
    time::{Duration, Instant},
};

/// 限流桶规则
///
/// 以 `key` 注册一个容量为 `capacity` 的令牌桶，每经过一个
/// `fill_interval` 补充 `quantum` 个令牌，令牌累积不超过容量。
#[derive(Debug, Clone)]
pub struct BucketRule {
    pub key: &'static str,
    pub fill_interval: Duration,
    pub capacity: i64,
    pub quantum: i64,
}

#[derive(Debug)]
struct BucketState {
    available: i64,
    last_fill: Instant,
}

/// 单个令牌桶
///
/// 取令牌时按经过的完整补充周期惰性补币，取不到立即失败，从不等待。
#[derive(Debug)]
struct Bucket {
    capacity: i64,
    quantum: i64,
    fill_interval: Duration,
    state: Mutex<BucketState>,
}

impl Bucket {
    fn new(rule: &BucketRule) -> Bucket {
        Bucket {
            capacity: rule.capacity,
            quantum: rule.quantum,
            fill_interval: rule.fill_interval,
            state: Mutex::new(BucketState {
                available: rule.capacity,
                last_fill: Instant::now(),
            }),
        }
    }

    /// 尝试取走一个令牌，补币和扣减在同一把锁内完成
    fn take_one(&self) -> bool {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let elapsed = state.last_fill.elapsed();
        let intervals = (elapsed.as_nanos() / self.fill_interval.as_nanos().max(1))
            .min(u128::from(u32::MAX)) as u32;
        if intervals > 0 {
            state.available = state
                .available
                .saturating_add(i64::from(intervals).saturating_mul(self.quantum))
                .min(self.capacity);
            state.last_fill += self.fill_interval * intervals;
        }

        if state.available > 0 {
            state.available -= 1;
            true
        } else {
            false
        }
    }
}

/// 按请求路径限流的令牌桶集合
///
/// 规则在启动时注册完毕，之后只读共享；可变状态只有各桶内部的
/// 令牌计数。查找取注册键中能作为请求路径前缀的最长者，保证
/// 重叠键下的行为确定。准入控制按注册键逐个开启：没有任何注册
/// 键匹配的路径不做限流，直接放行。
#[derive(Debug, Default)]
pub struct MethodLimiter {
    buckets: BTreeMap<&'static str, Bucket>,
}

impl MethodLimiter {
    pub fn new() -> MethodLimiter {
        MethodLimiter::default()
    }

    /// 注册限流规则，重复注册同一个键以后者为准
    pub fn add_rule(mut self, rule: BucketRule) -> MethodLimiter {
        self.buckets.insert(rule.key, Bucket::new(&rule));
        self
    }

    /// 限流键：去掉查询串的请求路径
    pub fn key(path: &str) -> &str {
        path.split('?').next().unwrap_or(path)
    }

    /// 最长前缀匹配查找命中的桶
    fn bucket_for(&self, key: &str) -> Option<&Bucket> {
        self.buckets
            .iter()
            .filter(|(k, _)| key.starts_with(*k))
            .max_by_key(|(k, _)| k.len())
            .map(|(_, b)| b)
    }

    /// 尝试为请求取一个令牌
    ///
    /// 命中的桶没有余量时立即拒绝；没有任何注册键匹配时不做
    /// 准入控制，直接放行。
    pub fn acquire(&self, key: &str) -> bool {
        match self.bucket_for(key) {
            Some(bucket) => bucket.take_one(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(capacity: i64, quantum: i64, fill_interval: Duration) -> MethodLimiter {
        MethodLimiter::new().add_rule(BucketRule {
            key: "/auth",
            fill_interval,
            capacity,
            quantum,
        })
    }

    #[test]
    fn burst_up_to_capacity_then_denied() {
        let limiter = limiter(3, 3, Duration::from_secs(60));

        for i in 0..3 {
            assert!(limiter.acquire("/auth"), "第 {} 次应成功", i + 1);
        }
        assert!(!limiter.acquire("/auth"), "超出容量应被拒绝");
    }

    #[test]
    fn refills_quantum_after_interval() {
        let limiter = limiter(5, 2, Duration::from_millis(50));

        for _ in 0..5 {
            assert!(limiter.acquire("/auth"));
        }
        assert!(!limiter.acquire("/auth"));

        std::thread::sleep(Duration::from_millis(60));
        // 一个周期后至少补充 quantum 个
        assert!(limiter.acquire("/auth"));
        assert!(limiter.acquire("/auth"));
        assert!(!limiter.acquire("/auth"));
    }

    #[test]
    fn tokens_never_exceed_capacity() {
        let limiter = limiter(2, 10, Duration::from_millis(10));

        std::thread::sleep(Duration::from_millis(50));
        assert!(limiter.acquire("/auth"));
        assert!(limiter.acquire("/auth"));
        assert!(!limiter.acquire("/auth"));
    }

    #[test]
    fn longest_prefix_wins() {
        let limiter = MethodLimiter::new()
            .add_rule(BucketRule {
                key: "/api",
                fill_interval: Duration::from_secs(60),
                capacity: 100,
                quantum: 100,
            })
            .add_rule(BucketRule {
                key: "/api/v1/tags",
                fill_interval: Duration::from_secs(60),
                capacity: 1,
                quantum: 1,
            });

        // 命中更具体的 /api/v1/tags 桶（容量 1）
        assert!(limiter.acquire("/api/v1/tags"));
        assert!(!limiter.acquire("/api/v1/tags"));
        // 其余 /api 路径仍走大桶
        assert!(limiter.acquire("/api/v1/articles"));
    }

    #[test]
    fn unruled_key_is_not_limited() {
        let limiter = limiter(1, 1, Duration::from_secs(60));
        for _ in 0..10 {
            assert!(limiter.acquire("/upload/file"));
        }
    }

    #[test]
    fn key_strips_query() {
        assert_eq!(MethodLimiter::key("/auth?token=x"), "/auth");
        assert_eq!(MethodLimiter::key("/auth"), "/auth");
    }

    #[test]
    fn concurrent_acquire_grants_exactly_capacity() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicI64, Ordering};

        let limiter = Arc::new(limiter(100, 100, Duration::from_secs(60)));
        let granted = Arc::new(AtomicI64::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let granted = Arc::clone(&granted);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        if limiter.acquire("/auth") {
                            granted.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("线程异常退出");
        }

        // 总请求 400，恰好放行容量 100
        assert_eq!(granted.load(Ordering::Relaxed), 100);
    }
}
