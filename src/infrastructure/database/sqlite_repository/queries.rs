pub(super) const INSERT_EMPLOYEE: &str = r#"
    INSERT INTO employees (id, display_name, created_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(id) DO UPDATE SET display_name = excluded.display_name
"#;

pub(super) const SELECT_EMPLOYEE_BY_ID: &str = r#"
    SELECT id, display_name, created_at
    FROM employees
    WHERE id = ?1
"#;

pub(super) const INSERT_SCHEDULE: &str = r#"
    INSERT INTO schedules (
        id,
        employee_id,
        work_date,
        section,
        shift_name,
        start_time,
        end_time,
        status,
        rejection_reason,
        visibility,
        created_at,
        updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
"#;

pub(super) const SELECT_SCHEDULE_BY_ID: &str = r#"
    SELECT id, employee_id, work_date, section, shift_name, start_time,
           end_time, status, rejection_reason, visibility, created_at,
           updated_at
    FROM schedules
    WHERE id = ?1
"#;

pub(super) const UPDATE_SCHEDULE_RESPONSE: &str = r#"
    UPDATE schedules
    SET status = ?2,
        rejection_reason = ?3,
        updated_at = ?4
    WHERE id = ?1
      AND status IN ('unset', 'pending')
"#;

pub(super) const SELECT_PUBLIC_SCHEDULES_FOR_EMPLOYEE: &str = r#"
    SELECT id, employee_id, work_date, section, shift_name, start_time,
           end_time, status, rejection_reason, visibility, created_at,
           updated_at
    FROM schedules
    WHERE employee_id = ?1
      AND visibility = 'public'
      AND work_date >= ?2
      AND work_date <= ?3
    ORDER BY work_date ASC, start_time ASC
"#;

pub(super) const INSERT_CHANGE_REQUEST: &str = r#"
    INSERT INTO change_requests (
        id,
        schedule_id,
        requested_status,
        reason,
        state,
        created_at,
        resolved_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub(super) const SELECT_CHANGE_REQUEST_BY_ID: &str = r#"
    SELECT id, schedule_id, requested_status, reason, state, created_at,
           resolved_at
    FROM change_requests
    WHERE id = ?1
"#;

pub(super) const SELECT_OPEN_CHANGE_REQUEST_BY_SCHEDULE: &str = r#"
    SELECT id, schedule_id, requested_status, reason, state, created_at,
           resolved_at
    FROM change_requests
    WHERE schedule_id = ?1
      AND state = 'open'
"#;

pub(super) const CLOSE_OPEN_CHANGE_REQUEST: &str = r#"
    UPDATE change_requests
    SET state = ?2,
        resolved_at = ?3
    WHERE id = ?1
      AND state = 'open'
"#;

pub(super) const APPLY_REQUESTED_STATUS_TO_SCHEDULE: &str = r#"
    UPDATE schedules
    SET status = ?2,
        rejection_reason = ?3,
        updated_at = ?4
    WHERE id = ?1
"#;

pub(super) const SELECT_SAME_DAY_SECTION_ROSTER: &str = r#"
    SELECT s.id AS schedule_id,
           s.employee_id,
           e.display_name,
           s.shift_name,
           s.start_time,
           s.end_time
    FROM schedules s
    JOIN employees e ON e.id = s.employee_id
    WHERE s.work_date = ?1
      AND s.section = ?2
      AND s.visibility = 'public'
      AND s.id <> ?3
    ORDER BY s.shift_name ASC, s.start_time ASC, e.display_name ASC
"#;
