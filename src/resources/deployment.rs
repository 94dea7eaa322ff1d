//! Deployment manifest — the only kind that depends on the tier.

use super::{tenant_namespace, CONTAINER_PORT, IMAGE};
use crate::core::types::TierProfile;

/// Render the tenant's web `Deployment` sized by `profile`.
pub fn render(tenant: &str, profile: &TierProfile) -> String {
    let namespace = tenant_namespace(tenant);
    let TierProfile {
        replicas,
        memory_request,
        memory_limit,
        cpu_request,
        cpu_limit,
        ..
    } = profile;
    format!(
        r#"---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: nginx-deployment
  namespace: {namespace}
  labels:
    app: web
    tenant: {tenant}
spec:
  replicas: {replicas}
  selector:
    matchLabels:
      app: web
  template:
    metadata:
      labels:
        app: web
        tenant: {tenant}
    spec:
      containers:
      - name: nginx
        image: {IMAGE}
        ports:
        - containerPort: {CONTAINER_PORT}
        resources:
          requests:
            memory: "{memory_request}"
            cpu: "{cpu_request}"
          limits:
            memory: "{memory_limit}"
            cpu: "{cpu_limit}"
"#
    )
}
